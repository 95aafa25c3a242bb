use super::*;
use crate::matrix::CellValue;

fn matrix(columns: &[&str], rows: &[&str], cells: &[&[i64]]) -> InfluenceMatrix {
    InfluenceMatrix::new(
        columns.iter().map(|s| s.to_string()).collect(),
        rows.iter().map(|s| s.to_string()).collect(),
        cells
            .iter()
            .map(|row| row.iter().map(|&v| CellValue::Int(v)).collect())
            .collect(),
    )
}

fn lines(matrix: &InfluenceMatrix) -> Vec<String> {
    emit(matrix).map(|eq| eq.to_string()).collect()
}

#[test]
fn test_single_contributor() {
    let m = matrix(&["R3"], &["R1", "M2"], &[&[1], &[0]]);
    assert_eq!(lines(&m), ["crc_r[3] <= crc_r[1];"]);
}

#[test]
fn test_no_contributors() {
    let m = matrix(&["M5"], &["R1"], &[&[0]]);
    assert_eq!(lines(&m), ["data_in[5] <= '0;"]);
}

#[test]
fn test_multiple_contributors_keep_row_order() {
    let m = matrix(&["R9"], &["R1", "R2", "M3"], &[&[1], &[1], &[1]]);
    assert_eq!(lines(&m), ["crc_r[9] <= crc_r[1] ^ crc_r[2] ^ data_in[3];"]);
}

#[test]
fn test_rows_are_not_sorted() {
    let m = matrix(&["R0"], &["M7", "R2", "M1"], &[&[1], &[1], &[1]]);
    assert_eq!(lines(&m), ["crc_r[0] <= data_in[7] ^ crc_r[2] ^ data_in[1];"]);
}

#[test]
fn test_one_line_per_column_in_order() {
    let m = matrix(
        &["R0", "R1", "R2"],
        &["M0", "M1"],
        &[&[1, 0, 1], &[0, 0, 1]],
    );
    assert_eq!(
        lines(&m),
        [
            "crc_r[0] <= data_in[0];",
            "crc_r[1] <= '0;",
            "crc_r[2] <= data_in[0] ^ data_in[1];",
        ]
    );
}

#[test]
fn test_separator_count_matches_fan_in() {
    let m = matrix(
        &["R0", "R1", "R2", "R3"],
        &["M0", "M1", "M2", "M3"],
        &[&[1, 0, 1, 1], &[0, 0, 1, 1], &[0, 0, 0, 1], &[0, 0, 0, 1]],
    );
    for (col, line) in lines(&m).iter().enumerate() {
        let fan_in = m.contributors(col).count();
        let separators = line.matches('^').count();
        if fan_in == 0 {
            assert!(line.ends_with("<= '0;"));
            assert_eq!(separators, 0);
        } else {
            assert_eq!(separators, fan_in - 1, "line: {}", line);
        }
    }
}

#[test]
fn test_only_values_equal_to_one_contribute() {
    let m = InfluenceMatrix::new(
        vec!["R0".into()],
        vec![
            "M0".into(),
            "M1".into(),
            "M2".into(),
            "M3".into(),
            "M4".into(),
            "M5".into(),
        ],
        vec![
            vec![CellValue::Float(1.0)],
            vec![CellValue::Int(2)],
            vec![CellValue::Text("x".into())],
            vec![CellValue::Bool(true)],
            vec![CellValue::Empty],
            vec![CellValue::Int(1)],
        ],
    );
    assert_eq!(
        lines(&m),
        ["crc_r[0] <= data_in[0] ^ data_in[3] ^ data_in[5];"]
    );
}

#[test]
fn test_true_cell_contributes() {
    let m = InfluenceMatrix::new(
        vec!["R0".into()],
        vec!["M0".into(), "M1".into()],
        vec![vec![CellValue::Bool(true)], vec![CellValue::Bool(false)]],
    );
    assert_eq!(lines(&m), ["crc_r[0] <= data_in[0];"]);
}

#[test]
fn test_padded_labels_emitted_verbatim() {
    let m = matrix(&[" R0 "], &["M0 "], &[&[1]]);
    // Leading whitespace defeats the prefix; trailing whitespace stays in the index
    assert_eq!(lines(&m), [" R0  <= data_in[0 ];"]);
}

#[test]
fn test_suspicious_cells() {
    assert!(is_suspicious(&CellValue::Int(2)));
    assert!(is_suspicious(&CellValue::Float(0.5)));
    assert!(is_suspicious(&CellValue::Text("x".into())));
    assert!(is_suspicious(&CellValue::Text("1".into())));
    assert!(is_suspicious(&CellValue::Error("Div0".into())));

    assert!(!is_suspicious(&CellValue::Empty));
    assert!(!is_suspicious(&CellValue::Int(0)));
    assert!(!is_suspicious(&CellValue::Int(1)));
    assert!(!is_suspicious(&CellValue::Float(1.0)));
    assert!(!is_suspicious(&CellValue::Bool(true)));
    assert!(!is_suspicious(&CellValue::Bool(false)));
}

#[test]
fn test_unconventional_names_pass_through() {
    let m = matrix(&["crc_next"], &["feedback", "M1"], &[&[1], &[1]]);
    assert_eq!(lines(&m), ["crc_next <= feedback ^ data_in[1];"]);
}

#[test]
fn test_empty_matrix_emits_nothing() {
    let m = matrix(&[], &[], &[]);
    assert_eq!(emit(&m).count(), 0);
}

#[test]
fn test_columns_without_rows_are_zero() {
    let m = matrix(&["R0", "R1"], &[], &[]);
    assert_eq!(lines(&m), ["crc_r[0] <= '0;", "crc_r[1] <= '0;"]);
}

#[test]
fn test_iterator_is_single_pass() {
    let m = matrix(&["R0", "R1"], &["M0"], &[&[1, 0]]);
    let mut equations = emit(&m);
    assert_eq!(equations.len(), 2);
    assert!(equations.next().is_some());
    assert_eq!(equations.len(), 1);
    assert!(equations.next().is_some());
    assert!(equations.next().is_none());
    assert!(equations.next().is_none());

    // A fresh call starts from the first column again
    assert_eq!(emit(&m).next().map(|eq| eq.output()), Some("R0"));
}

#[test]
fn test_equation_accessors() {
    let m = matrix(&["R4"], &["R1", "M2"], &[&[0], &[1]]);
    let eq = emit(&m).next().expect("one equation");
    assert_eq!(eq.output(), "R4");
    assert_eq!(eq.inputs(), ["M2"]);
    assert!(!eq.is_zero());
}

#[test]
fn test_write_with_banner() {
    let m = matrix(&["R3"], &["R1", "M2"], &[&[1], &[0]]);
    let text = m.to_equations_string(&EmitOptions::default()).unwrap();
    assert_eq!(
        text,
        "// -----------------------------\n\
         // Auto-generated CRC equations\n\
         // -----------------------------\n\
         \n\
         crc_r[3] <= crc_r[1];\n"
    );
}

#[test]
fn test_write_without_banner() {
    let m = matrix(&["M5"], &["R1"], &[&[0]]);
    let text = m
        .to_equations_string(&EmitOptions { banner: false })
        .unwrap();
    assert_eq!(text, "data_in[5] <= '0;\n");
}
