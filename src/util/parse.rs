use chrono::NaiveDate;

use crate::error::{internal::InternalError, AppError};

/// Date format used for every date shown to or typed by users.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a u64 value from a stored String id
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Builds a calendar date from day, month and year values typed by a user.
///
/// # Returns
/// - `Ok(NaiveDate)` - The date exists
/// - `Err(AppError::BadRequest)` - Out-of-range components or an impossible date like 31-02
pub fn parse_date_parts(day: i64, month: i64, year: i64) -> Result<NaiveDate, AppError> {
    let invalid = || {
        AppError::BadRequest(
            "Invalid date format. Please check that your inputs are actual dates!".to_string(),
        )
    };

    let day = u32::try_from(day).map_err(|_| invalid())?;
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let year = i32::try_from(year).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses a `DD-MM-YYYY` date typed by a user.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Input is not a valid `DD-MM-YYYY` date
pub fn parse_user_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::BadRequest(format!(
            "`{}` is not a valid date, use DD-MM-YYYY (for example 01-02-2025)",
            value
        ))
    })
}
