use buildino_core::calendar::{
    digits::{to_english_digits, to_persian_digits},
    days_in_month, gregorian_to_jalali, is_leap_jalali_year, jalali_to_gregorian, JalaliDate,
};
use chrono::NaiveDate;

#[test]
fn gregorian_round_trip_1700_to_2100() {
    let mut date = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
    while date <= end {
        let jalali = JalaliDate::from_gregorian(date);
        assert_eq!(
            jalali.to_gregorian(),
            date,
            "round trip failed for {date} (jalali {jalali})"
        );
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn jalali_round_trip_across_each_month() {
    for year in 1100..1500 {
        for month in 1..=12 {
            for day in [1, 15, days_in_month(year, month)] {
                let jalali = JalaliDate::new(year, month, day).unwrap();
                let (gy, gm, gd) = jalali_to_gregorian(year, month, day).unwrap();
                let back = gregorian_to_jalali(gy, gm, gd).unwrap();
                assert_eq!(back, jalali);
            }
        }
    }
}

#[test]
fn month_lengths_follow_the_leap_cycle() {
    for year in 1300..1500 {
        for month in 1..=6 {
            assert_eq!(days_in_month(year, month), 31);
        }
        for month in 7..=11 {
            assert_eq!(days_in_month(year, month), 30);
        }
        let esfand = days_in_month(year, 12);
        if is_leap_jalali_year(year) {
            assert_eq!(esfand, 30, "leap year {year} must have a 30-day Esfand");
            assert!(JalaliDate::new(year, 12, 30).is_some());
        } else {
            assert_eq!(esfand, 29, "common year {year} must have a 29-day Esfand");
            assert!(JalaliDate::new(year, 12, 30).is_none());
        }
    }
}

#[test]
fn consecutive_years_differ_by_year_length() {
    for year in 1380..1420 {
        let start = JalaliDate::new(year, 1, 1).unwrap().to_gregorian();
        let next = JalaliDate::new(year + 1, 1, 1).unwrap().to_gregorian();
        let expected = if is_leap_jalali_year(year) { 366 } else { 365 };
        assert_eq!((next - start).num_days(), expected, "year {year}");
    }
}

#[test]
fn known_reference_dates() {
    // Nowruz anchors and mid-year dates checked against the 2820-cycle tables.
    assert_eq!(jalali_to_gregorian(1400, 1, 1), Some((2021, 3, 21)));
    assert_eq!(jalali_to_gregorian(1399, 12, 30), Some((2021, 3, 20)));
    assert_eq!(jalali_to_gregorian(1379, 1, 1), Some((2000, 3, 20)));
    assert_eq!(
        gregorian_to_jalali(2021, 3, 21),
        JalaliDate::new(1400, 1, 1)
    );
    assert_eq!(
        gregorian_to_jalali(2000, 3, 20),
        JalaliDate::new(1379, 1, 1)
    );
}

#[test]
fn digit_translation_round_trip_and_purity() {
    let samples = [
        "1403/05/02",
        "charge of 1250000 Toman",
        "no digits here، فقط متن",
        "",
    ];
    for sample in samples {
        let persian = to_persian_digits(sample);
        assert_eq!(to_english_digits(&persian), sample);
        // Idempotent per direction.
        assert_eq!(to_persian_digits(&persian), persian);
        assert_eq!(to_english_digits(sample), sample);
    }
}

#[test]
fn parse_failure_degrades_to_today() {
    let today = JalaliDate::today();
    for garbage in ["", "1403/13/01", "1403/05", "abc/de/fg"] {
        let fallback = JalaliDate::parse_or_today(garbage);
        assert_eq!(fallback.period_key(), today.period_key(), "input {garbage:?}");
    }
}
