use chrono::NaiveDate;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn month_labels_are_zero_padded() {
    assert_eq!(Granularity::Month.label(date(2023, 1, 31)), "2023-01");
    assert_eq!(Granularity::Month.label(date(2023, 12, 1)), "2023-12");
}

#[test]
fn quarter_labels() {
    assert_eq!(Granularity::Quarter.label(date(2023, 1, 1)), "2023-Q1");
    assert_eq!(Granularity::Quarter.label(date(2023, 3, 31)), "2023-Q1");
    assert_eq!(Granularity::Quarter.label(date(2023, 4, 1)), "2023-Q2");
    assert_eq!(Granularity::Quarter.label(date(2023, 12, 31)), "2023-Q4");
}

#[test]
fn year_labels() {
    assert_eq!(Granularity::Year.label(date(2024, 6, 15)), "2024");
}

#[test]
fn lexical_order_is_chronological() {
    let mut labels = vec![
        Granularity::Month.label(date(2024, 2, 1)),
        Granularity::Month.label(date(2023, 11, 1)),
        Granularity::Month.label(date(2024, 1, 1)),
    ];
    labels.sort();
    assert_eq!(labels, vec!["2023-11", "2024-01", "2024-02"]);
}

#[test]
fn from_str_accepts_aliases() {
    assert_eq!("month".parse::<Granularity>().unwrap(), Granularity::Month);
    assert_eq!("Quarterly".parse::<Granularity>().unwrap(), Granularity::Quarter);
    assert_eq!("annual".parse::<Granularity>().unwrap(), Granularity::Year);
    assert!("weekly".parse::<Granularity>().is_err());
}

#[test]
fn default_is_month() {
    assert_eq!(Granularity::default(), Granularity::Month);
}
