use chrono::NaiveDate;
use pricewatch_core::{
    config::DemoCatalog,
    market::generate_demo,
    record::PriceRecord,
    rng::{RngBank, StreamSlot},
    table::PriceTable,
    view::{derive_region, derive_row, market_comparison, price_strategy, summarize, ChartKind, SUGGESTED_RATIO},
    WatchError,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn market_average_and_suggested_price_for_one_record() {
    let record = PriceRecord::new("Karnataka", "Dosa", 80.0, 100.0, 105.0, day());
    let row = derive_row(&record, SUGGESTED_RATIO).unwrap();

    assert!((row.market_average - 102.5).abs() < 1e-9);
    assert!((row.suggested_price - 97.375).abs() < 1e-9);
    assert_eq!(row.record, record);
}

#[test]
fn suggested_price_is_95_percent_of_market_average_for_every_row() {
    let mut rng = RngBank::new(2024).for_stream(StreamSlot::Demo);
    let table = generate_demo(&DemoCatalog::default(), day(), &mut rng);

    for region in table.regions() {
        for row in derive_region(&table, region, SUGGESTED_RATIO).unwrap() {
            let r = &row.record;
            let expected = 0.95 * ((r.competitor_a_price + r.competitor_b_price) / 2.0);
            assert!(
                (row.suggested_price - expected).abs() < 1e-9,
                "{} / {}: {} vs {expected}",
                r.region,
                r.dish,
                row.suggested_price
            );
        }
    }
}

#[test]
fn region_view_only_contains_that_region_in_table_order() {
    let table = PriceTable::from_rows(vec![
        PriceRecord::new("Karnataka", "Dosa", 80.0, 100.0, 105.0, day()),
        PriceRecord::new("Telangana", "Biryani", 190.0, 210.0, 214.0, day()),
        PriceRecord::new("Karnataka", "Vada", 30.0, 40.0, 44.0, day()),
    ]);

    let rows = derive_region(&table, "Karnataka", SUGGESTED_RATIO).unwrap();
    let dishes: Vec<&str> = rows.iter().map(|r| r.record.dish.as_str()).collect();
    assert_eq!(dishes, vec!["Dosa", "Vada"]);

    let summary = summarize("Karnataka", &rows);
    assert_eq!(summary.total_dishes, 2);

    assert!(derive_region(&table, "Kerala", SUGGESTED_RATIO).unwrap().is_empty());
}

#[test]
fn non_numeric_competitor_price_is_invalid_input() {
    let record = PriceRecord::new("Karnataka", "Dosa", 80.0, f64::NAN, 105.0, day());
    assert!(matches!(
        derive_row(&record, SUGGESTED_RATIO),
        Err(WatchError::InvalidInput(_))
    ));
}

#[test]
fn charts_plot_one_point_per_row() {
    let table = PriceTable::from_rows(vec![
        PriceRecord::new("Karnataka", "Dosa", 80.0, 100.0, 105.0, day()),
        PriceRecord::new("Karnataka", "Idli", 40.0, 50.0, 54.0, day()),
    ]);
    let rows = derive_region(&table, "Karnataka", SUGGESTED_RATIO).unwrap();

    let line = market_comparison(&rows);
    assert_eq!(line.kind, ChartKind::Line);
    let names: Vec<&str> = line.series.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Your Price", "Swiggy", "Zomato"]);
    assert_eq!(line.series[2].points, vec![("Dosa".to_string(), 105.0), ("Idli".to_string(), 54.0)]);

    let bars = price_strategy(&rows);
    assert_eq!(bars.kind, ChartKind::Bar);
    let names: Vec<&str> = bars.series.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Your Price", "Market Avg", "Suggested Price"]);
    assert_eq!(bars.series[1].points[1], ("Idli".to_string(), 52.0));
}
