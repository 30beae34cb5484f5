use chrono::NaiveDate;
use pricewatch_core::{record::PriceRecord, table::PriceTable, WatchError};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn record(region: &str, dish: &str) -> PriceRecord {
    PriceRecord::new(region, dish, 80.0, 100.0, 105.0, day())
}

#[test]
fn append_adds_one_row_at_the_end() {
    let mut table = PriceTable::new();
    for (i, dish) in ["Dosa", "Idli", "Vada"].into_iter().enumerate() {
        let r = record("Karnataka", dish);
        let next = table.append(r.clone()).unwrap();
        assert_eq!(next.len(), i + 1);
        assert_eq!(next.last(), Some(&r));
        table = next;
    }
}

#[test]
fn append_leaves_the_original_table_alone() {
    let table = PriceTable::new().append(record("Karnataka", "Dosa")).unwrap();
    let _bigger = table.append(record("Karnataka", "Idli")).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn append_rejects_empty_region_or_dish() {
    let table = PriceTable::new();
    for (region, dish) in [("", "Dosa"), ("Karnataka", ""), ("", "")] {
        let err = table.append(record(region, dish)).unwrap_err();
        assert!(
            matches!(err, WatchError::InvalidInput(_)),
            "({region:?}, {dish:?}) gave {err:?}"
        );
    }
    assert!(table.is_empty());
}

#[test]
fn append_rejects_negative_and_non_numeric_prices() {
    let table = PriceTable::new();

    let mut negative = record("Karnataka", "Dosa");
    negative.own_price = -1.0;
    assert!(matches!(table.append(negative), Err(WatchError::InvalidInput(_))));

    let mut nan = record("Karnataka", "Dosa");
    nan.competitor_b_price = f64::NAN;
    assert!(matches!(table.append(nan), Err(WatchError::InvalidInput(_))));
}

#[test]
fn duplicate_dishes_in_a_region_are_kept() {
    let table = PriceTable::new()
        .append(record("Karnataka", "Dosa"))
        .unwrap()
        .append(record("Karnataka", "Dosa"))
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.for_region("Karnataka").count(), 2);
}

#[test]
fn regions_are_listed_in_first_appearance_order() {
    let table = PriceTable::from_rows(vec![
        record("Telangana", "Biryani"),
        record("Karnataka", "Dosa"),
        record("Telangana", "Pizza"),
        record("Tamil Nadu", "Idli"),
    ]);

    assert_eq!(table.regions(), vec!["Telangana", "Karnataka", "Tamil Nadu"]);
    let dishes: Vec<&str> = table.for_region("Telangana").map(|r| r.dish.as_str()).collect();
    assert_eq!(dishes, vec!["Biryani", "Pizza"]);
    assert_eq!(table.for_region("Kerala").count(), 0);
}

#[test]
fn whitespace_names_count_as_non_empty() {
    let table = PriceTable::new().append(record(" ", "Dosa")).unwrap();
    assert_eq!(table.regions(), vec![" "]);
}
