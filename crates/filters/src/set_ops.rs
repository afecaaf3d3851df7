//! Set operations over lists of opaque values.
//!
//! Values only need `PartialEq`, so cells, strings and numbers all work.

/// Values that occur at least once per input list, counted over all lists
/// together.
///
/// The threshold is the number of lists and the count is taken over the
/// concatenation of every list, so a value repeated inside a single list can
/// reach it on its own: `[[1, 1], [2]]` yields `[1]`. Output is deduplicated
/// and in first-seen order.
pub fn intersect_all<T: PartialEq + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let required = lists.len();
    let mut counts: Vec<(&T, usize)> = Vec::new();

    for value in lists.iter().flatten() {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= required)
        .map(|(value, _)| value.clone())
        .collect()
}

/// Concatenate every list and drop repeated values, keeping the earliest.
pub fn flatten_unique<T: PartialEq + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let mut output: Vec<T> = Vec::new();
    for value in lists.iter().flatten() {
        if !output.contains(value) {
            output.push(value.clone());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsift_core::CellValue;

    #[test]
    fn test_intersect_all() {
        assert_eq!(intersect_all(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
        assert_eq!(
            intersect_all(&[vec!["a", "b"], vec!["b"], vec!["b", "c"]]),
            vec!["b"]
        );
    }

    #[test]
    fn test_intersect_all_counts_multiplicity() {
        assert_eq!(intersect_all(&[vec![1, 1], vec![2]]), vec![1]);
        assert_eq!(intersect_all(&[vec![5, 5, 5], vec![], vec![]]), vec![5]);
    }

    #[test]
    fn test_intersect_all_edges() {
        let none: Vec<Vec<i32>> = Vec::new();
        assert!(intersect_all(&none).is_empty());
        assert_eq!(intersect_all(&[vec![3, 1, 3]]), vec![3, 1]);
    }

    #[test]
    fn test_flatten_unique() {
        assert_eq!(
            flatten_unique(&[vec![3, 1], vec![1, 2, 3], vec![4]]),
            vec![3, 1, 2, 4]
        );
    }

    #[test]
    fn test_cells_compare_strictly() {
        let lists = vec![
            vec![CellValue::Int(1), CellValue::from("x")],
            vec![CellValue::from("1"), CellValue::from("x")],
        ];
        assert_eq!(intersect_all(&lists), vec![CellValue::from("x")]);
        assert_eq!(flatten_unique(&lists).len(), 3);
    }
}
