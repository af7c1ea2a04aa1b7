//! Display formatting for bill dates and statuses.
//!
//! The UI renders dates as `"7 Sep. 23"` style strings with French month
//! abbreviations. Parse failures are returned to the caller: the list view
//! falls back to the raw date for that record instead of dropping it.

use chrono::{Datelike, NaiveDate};

use crate::BillStatus;

/// French month abbreviations, capitalized and truncated to three letters.
/// Juin and juillet collapse to the same abbreviation, as in the locale
/// output the UI always used.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO calendar date (`YYYY-MM-DD`, optional time suffix ignored)
/// as `"<day> <MonthAbbrev>. <2-digit year>"`.
///
/// ```
/// assert_eq!(shared::format::format_date("2023-09-07").unwrap(), "7 Sep. 23");
/// ```
pub fn format_date(raw: &str) -> Result<String, chrono::ParseError> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?;
    let month = MONTH_ABBREV[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year() % 100))
}

/// Map a bill status to its French display label.
///
/// Unrecognized codes pass through unchanged.
pub fn format_status(status: &BillStatus) -> String {
    match status {
        BillStatus::Pending => "En attente".to_string(),
        BillStatus::Accepted => "Accepté".to_string(),
        BillStatus::Refused => "Refusé".to_string(),
        BillStatus::Other(code) => code.clone(),
    }
}
