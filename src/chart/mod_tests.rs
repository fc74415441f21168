use indexmap::IndexMap;
use rust_decimal_macros::dec;

use super::*;

pub(super) fn result(dimension: Dimension, rows: &[(&str, Decimal, Decimal)]) -> AggregateResult {
    let groups: IndexMap<String, GroupMetrics> = rows
        .iter()
        .map(|(key, sales, expenses)| ((*key).to_string(), GroupMetrics::new(1, *sales, *expenses)))
        .collect();
    AggregateResult::from_groups(dimension, groups)
}

pub(super) fn product_result() -> AggregateResult {
    result(
        Dimension::Product,
        &[
            ("Product A", dec!(15700), dec!(9400)),
            ("Product B", dec!(14600), dec!(8900)),
            ("Product C", dec!(12100), dec!(7700)),
        ],
    )
}

mod extract_tests {
    use super::*;

    #[test]
    fn converts_each_requested_series() {
        let spec = ChartSpec::new(ChartKind::Bar, "Sales by Product")
            .with_series(vec![Series::Sales, Series::Profit]);
        let data = PlotData::extract(&product_result(), &spec).unwrap();

        assert_eq!(data.categories, vec!["Product A", "Product B", "Product C"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].series, Series::Sales);
        assert!((data.series[0].values[0] - 15_700.0).abs() < 1e-9);
        assert_eq!(data.series[1].amounts[0], dec!(6300));
    }

    #[test]
    fn empty_result_is_rejected() {
        let empty = result(Dimension::Region, &[]);
        let spec = ChartSpec::new(ChartKind::Pie, "Sales by Region");

        let err = PlotData::extract(&empty, &spec).unwrap_err();
        assert_eq!(
            err,
            RenderError::EmptyInput {
                chart: "Sales by Region".to_string()
            }
        );
    }

    #[test]
    fn missing_series_is_rejected() {
        let spec = ChartSpec::new(ChartKind::Bar, "Nothing").with_series(Vec::new());

        let err = PlotData::extract(&product_result(), &spec).unwrap_err();
        assert!(matches!(err, RenderError::NoSeries { .. }));
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn bar_chart_produces_svg_and_figure() {
        let spec = ChartSpec::new(ChartKind::Bar, "Sales by Product").with_axes("Product", "Amount");
        let artifact = render(&product_result(), &spec).unwrap();

        assert_eq!(artifact.dimension, Dimension::Product);
        assert_eq!(artifact.kind, ChartKind::Bar);
        assert_eq!(artifact.caption, "Sales by Product");
        assert!(artifact.svg.starts_with("<svg"));
        assert!(artifact.svg.contains("<title>Sales by Product</title>"));
        assert!(!artifact.figure.shapes.is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        let spec = ChartSpec::new(ChartKind::Line, "Trend").with_series(vec![Series::Sales, Series::Profit]);
        let first = render(&product_result(), &spec).unwrap();
        let second = render(&product_result(), &spec).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn custom_size_is_applied() {
        let spec = ChartSpec::new(ChartKind::Bar, "Sized").with_size(800.0, 400.0);
        let artifact = render(&product_result(), &spec).unwrap();

        assert!(artifact.svg.contains(r#"viewBox="0 0 800 400""#));
    }

    #[test]
    fn pie_with_negative_value_fails() {
        let regions = result(
            Dimension::Region,
            &[("North", dec!(100), dec!(0)), ("South", dec!(-5), dec!(0))],
        );
        let spec = ChartSpec::new(ChartKind::Pie, "Sales by Region");

        let err = render(&regions, &spec).unwrap_err();
        assert!(matches!(err, RenderError::DegeneratePie { .. }));
    }
}

#[test]
fn chart_kind_display() {
    assert_eq!(ChartKind::Bar.to_string(), "bar");
    assert_eq!(ChartKind::Line.to_string(), "line");
    assert_eq!(ChartKind::Pie.to_string(), "pie");
}

#[test]
fn series_values_come_from_metrics() {
    let metrics = GroupMetrics::new(2, dec!(100), dec!(30));
    assert_eq!(Series::Sales.value(&metrics), dec!(100));
    assert_eq!(Series::Expenses.value(&metrics), dec!(30));
    assert_eq!(Series::Profit.value(&metrics), dec!(70));
}
