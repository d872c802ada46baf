use super::*;

fn item(quantity: u32, unit_price: f64) -> LineItem {
    LineItem {
        description: "work".to_owned(),
        quantity,
        unit_price,
    }
}

#[test]
fn line_total_multiplies_quantity_by_price() {
    assert!((line_total(&item(3, 25.0)) - 75.0).abs() < f64::EPSILON);
}

#[test]
fn invoice_total_sums_all_lines() {
    let items = vec![item(2, 50.0), item(1, 19.99), item(4, 0.25)];
    assert!((invoice_total(&items) - 120.99).abs() < 1e-9);
}

#[test]
fn empty_invoice_totals_zero() {
    assert!((invoice_total(&[])).abs() < f64::EPSILON);
}

#[test]
fn zero_quantity_lines_contribute_nothing() {
    let items = vec![item(0, 100.0)];
    assert!((invoice_total(&items)).abs() < f64::EPSILON);
}

#[test]
fn amounts_format_as_dollars_with_cents() {
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(120.5), "$120.50");
    assert_eq!(format_amount(19.999), "$20.00");
}
