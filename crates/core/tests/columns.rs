use rowsift_core::{column_index, column_letter, parse_column_list, ColumnSpec, Table};

#[test]
fn test_known_letters() {
    let cases = [(0, "A"), (25, "Z"), (26, "AA"), (27, "AB"), (701, "ZZ"), (702, "AAA")];
    for (index, letters) in cases {
        assert_eq!(column_letter(index), letters);
        assert_eq!(column_index(letters), Some(index));
    }
}

#[test]
fn test_bijection_over_wide_range() {
    for n in (0..1_000_000).step_by(997) {
        assert_eq!(column_index(&column_letter(n)), Some(n));
    }
}

#[test]
fn test_list_resolution_order() {
    assert_eq!(parse_column_list("A,C,2"), vec![0, 2, 1]);
    assert_eq!(parse_column_list("c, a, C, 3"), vec![2, 0]);
}

#[test]
fn test_unresolvable_tokens_fall_back_to_all_columns() {
    let spec = ColumnSpec::parse("0, ?, -2");
    assert!(spec.is_all());

    let table = Table::from_data(vec![vec!["x", "y", "z"]]);
    assert_eq!(spec.resolve(table.col_count()), vec![0, 1, 2]);
}
