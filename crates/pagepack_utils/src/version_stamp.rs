use chrono::{Datelike, Local, NaiveDate};

/// Formats a date as `<year><month><day>` with no separators or zero padding,
/// e.g. `2026-08-07` becomes `202687`. Coarse by design: it is a daily
/// cache-busting marker embedded in output file names, not a content hash.
pub fn version_stamp(date: NaiveDate) -> String {
  format!("{}{}{}", date.year(), date.month(), date.day())
}

/// Stamp for the current calendar day in the process's local time zone.
/// Computed once per invocation and treated as immutable configuration.
pub fn today_stamp() -> String {
  version_stamp(Local::now().date_naive())
}

#[cfg(test)]
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_version_stamp_is_unpadded() {
  assert_eq!(version_stamp(date(2026, 8, 7)), "202687");
  assert_eq!(version_stamp(date(2026, 12, 31)), "20261231");
}

#[test]
fn test_version_stamp_changes_daily() {
  assert_ne!(version_stamp(date(2026, 8, 7)), version_stamp(date(2026, 8, 8)));
  assert_eq!(version_stamp(date(2026, 8, 7)), version_stamp(date(2026, 8, 7)));
}

#[test]
fn test_today_stamp_is_stable_within_an_invocation() {
  assert_eq!(today_stamp(), today_stamp());
}
