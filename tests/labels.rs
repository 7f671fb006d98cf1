use chrono::NaiveDate;
use solar_system_orbits::transfer::{date_label, format_months_days};

#[test]
fn seventy_five_days_is_two_months_fifteen_days() {
    assert_eq!(format_months_days(75.0), "2m15d");
}

#[test]
fn typical_transfer_label() {
    // Earth→Mars Hohmann at 1.0/1.524 AU.
    assert_eq!(format_months_days(258.92), "8m18d");
}

#[test]
fn date_labels_use_abbreviated_month() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    assert_eq!(date_label(date), "Mar 15");
}
