use crate::matching::size_standards::{SizeMeasure, SizeStandardTable, DEFAULT_STANDARD};

#[test]
fn exact_code_match_wins() {
    let standard = SizeStandardTable::shared().lookup("541511");
    assert_eq!(standard.measure, SizeMeasure::Revenue);
    assert_eq!(standard.threshold, 32_500_000);
}

#[test]
fn falls_back_to_three_digit_prefix() {
    let standard = SizeStandardTable::shared().lookup("541990");
    assert_eq!(standard.measure, SizeMeasure::Revenue);
    assert_eq!(standard.threshold, 12_500_000);
}

#[test]
fn falls_back_to_two_digit_prefix() {
    let standard = SizeStandardTable::shared().lookup("529999");
    assert_eq!(standard.measure, SizeMeasure::Revenue);
    assert_eq!(standard.threshold, 47_000_000);
}

#[test]
fn unknown_code_resolves_to_default() {
    let standard = SizeStandardTable::shared().lookup("999999");
    assert_eq!(standard, DEFAULT_STANDARD);
}

#[test]
fn empty_code_resolves_to_default() {
    let standard = SizeStandardTable::shared().lookup("");
    assert_eq!(standard, DEFAULT_STANDARD);
}

#[test]
fn manufacturing_codes_use_employee_counts() {
    let exact = SizeStandardTable::shared().lookup("336411");
    assert_eq!(exact.measure, SizeMeasure::Employees);
    assert_eq!(exact.threshold, 1_500);

    let prefixed = SizeStandardTable::shared().lookup("334220");
    assert_eq!(prefixed.measure, SizeMeasure::Employees);
    assert_eq!(prefixed.threshold, 1_250);
}

#[test]
fn lookup_trims_surrounding_whitespace() {
    let standard = SizeStandardTable::shared().lookup(" 541511 ");
    assert_eq!(standard.threshold, 32_500_000);
}
