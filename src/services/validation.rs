//! Declarative field validation.
//!
//! Each operation owns an ordered table of [`Constraint`]s. [`validate`] walks
//! the table top to bottom and stops at the first violated row, so the order
//! of rows is also the order in which callers see errors.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::error::{AppError, AppResult};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);
const DATE_TIME_T_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);
const DATE_TIME_OFFSET_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]][offset_hour sign:mandatory]:[offset_minute]"
);

/// The value a request supplied for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Integer(i64),
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Absent, |v| FieldValue::Integer(v.into()))
    }
}

/// A request body whose fields can be looked up by name
pub trait Fields {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present and not empty (`""` and `0` count as missing)
    Required,
    /// Present and not whitespace-only
    NotBlank,
    /// At most this many characters; absent values pass
    MaxLength(usize),
    /// Present and parseable as a calendar date
    Date,
    /// Not earlier than today; absent or unparseable values pass
    NotPast,
}

#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Constraint {
    pub const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }

    fn holds(&self, value: FieldValue<'_>, today: Date) -> bool {
        match (self.check, value) {
            (Check::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Check::Required, FieldValue::Integer(n)) => n != 0,
            (Check::NotBlank, FieldValue::Text(s)) => !s.trim().is_empty(),
            (Check::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= max,
            (Check::MaxLength(_), _) => true,
            (Check::Date, FieldValue::Text(s)) => parse_calendar_date(s).is_some(),
            (Check::NotPast, FieldValue::Text(s)) => {
                parse_calendar_date(s).is_none_or(|date| date >= today)
            }
            (Check::NotPast, _) => true,
            _ => false,
        }
    }
}

/// Check `fields` against rules that do not depend on the current date.
///
/// Tables containing [`Check::NotPast`] go through [`validate_as_of`].
pub fn validate(fields: &impl Fields, constraints: &[Constraint]) -> AppResult<()> {
    debug_assert!(
        constraints.iter().all(|c| c.check != Check::NotPast),
        "NotPast rules need a date, use validate_as_of"
    );
    validate_as_of(fields, constraints, Date::MIN)
}

/// Check `fields` against `constraints` in order, failing on the first violation
pub fn validate_as_of(
    fields: &impl Fields,
    constraints: &[Constraint],
    today: Date,
) -> AppResult<()> {
    match constraints
        .iter()
        .find(|c| !c.holds(fields.field(c.field), today))
    {
        Some(violated) => Err(AppError::Validation(violated.message.to_string())),
        None => Ok(()),
    }
}

/// Parse a date or timestamp and keep only its calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD[ T]hh:mm[:ss[.fff]]`,
/// the last optionally followed by `Z` or a `±hh:mm` offset.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();

    if let Ok(date) = Date::parse(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(timestamp.date());
    }
    if let Ok(timestamp) = OffsetDateTime::parse(raw, DATE_TIME_OFFSET_FORMAT) {
        return Some(timestamp.date());
    }

    let local = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
    PrimitiveDateTime::parse(local, DATE_TIME_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(local, DATE_TIME_T_FORMAT))
        .ok()
        .map(|timestamp| timestamp.date())
}
