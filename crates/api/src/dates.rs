use time::{
    error::ParseFromDescription, format_description::BorrowedFormatItem,
    macros::format_description, Date, Duration,
};

/// The only accepted date shape, both on the wire and in the dataset.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Length of the trailing window used by the precipitation and tobs routes.
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Rejects signed years, single digit months/days, other separators,
/// trailing input and dates that do not exist on the calendar
/// (e.g. `2023-02-30`).
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    // `[year]` takes an optional sign, the wire format does not
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseFromDescription::InvalidComponent("year").into());
    }
    Date::parse(value, DATE_FORMAT)
}

/// Render a date as `YYYY-MM-DD`, the same shape the dataset stores.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Exactly 365 days before `date`, regardless of leap years.
pub fn one_year_prior(date: Date) -> Date {
    date.saturating_sub(Duration::days(TRAILING_WINDOW_DAYS))
}
