use csv::StringRecord;

use super::*;

#[test]
fn resolves_canonical_order() {
    let headers = StringRecord::from(vec!["date", "product", "region", "sales", "expenses"]);
    let columns = ColumnIndex::from_headers(&headers).unwrap();

    assert_eq!(
        columns,
        ColumnIndex {
            date: 0,
            product: 1,
            region: 2,
            sales: 3,
            expenses: 4,
        }
    );
}

#[test]
fn resolves_any_order_and_case() {
    let headers = StringRecord::from(vec!["Expenses", "SALES", "Notes", "Region", "Product", "Date"]);
    let columns = ColumnIndex::from_headers(&headers).unwrap();

    assert_eq!(columns.expenses, 0);
    assert_eq!(columns.sales, 1);
    assert_eq!(columns.region, 3);
    assert_eq!(columns.product, 4);
    assert_eq!(columns.date, 5);
}

#[test]
fn strips_bom_and_whitespace() {
    let headers = StringRecord::from(vec!["\u{feff}Date", " product ", "region", "sales", "expenses"]);
    let columns = ColumnIndex::from_headers(&headers).unwrap();

    assert_eq!(columns.date, 0);
    assert_eq!(columns.product, 1);
}

#[test]
fn first_duplicate_header_wins() {
    let headers = StringRecord::from(vec!["date", "sales", "product", "region", "sales", "expenses"]);
    let columns = ColumnIndex::from_headers(&headers).unwrap();

    assert_eq!(columns.sales, 1);
}

#[test]
fn reports_every_missing_column() {
    let headers = StringRecord::from(vec!["date", "product"]);
    let err = ColumnIndex::from_headers(&headers).unwrap_err();

    match err {
        IngestError::MissingColumns { missing } => {
            assert_eq!(missing, vec!["region", "sales", "expenses"]);
        }
        other => panic!("Expected MissingColumns, got {other:?}"),
    }
}
