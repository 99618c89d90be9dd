use chrono::{NaiveDate, NaiveTime};

use crate::server::error::AppError;

/// Largest page size any list endpoint will return.
pub const MAX_LIMIT: u64 = 100;

/// Resolves a `?limit=` query value.
///
/// Missing values use `default`; everything else is clamped to `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).clamp(1, MAX_LIMIT)
}

/// Parses a comma separated id list such as `?categories=1,2,3`.
///
/// Blank and unparseable entries are skipped.
pub fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i32>().ok())
        .collect()
}

/// Parses the hobbies form field.
///
/// Accepts either a JSON array (`[1, 2]`) or a comma separated list (`1,2`). An empty
/// value clears the hobby set.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed category ids
/// - `Err(AppError::BadRequest)` - Value is neither a JSON array of ids nor a list of integers
pub fn parse_hobbies(raw: &str) -> Result<Vec<i32>, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<i32>>(trimmed)
            .map_err(|_| AppError::BadRequest("Invalid hobbies format".to_string()));
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| AppError::BadRequest("Invalid hobbies format".to_string()))
        })
        .collect()
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {}, expected YYYY-MM-DD", field)))
}

/// Parses a time of day in `HH:MM:SS` or `HH:MM` form.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::BadRequest(format!("Invalid {}, expected HH:MM", field)))
}

/// Parses a required integer form field.
pub fn parse_i32(field: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}, expected an integer", field)))
}

/// Parses an optional coordinate within `-bound..=bound`; blank values count as absent.
pub fn parse_coordinate(
    field: &str,
    value: Option<&str>,
    bound: f64,
) -> Result<Option<f64>, AppError> {
    let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match v.parse::<f64>() {
        Ok(n) if n.is_finite() && n.abs() <= bound => Ok(Some(n)),
        _ => Err(AppError::BadRequest(format!(
            "Invalid {}, expected a number between -{} and {}",
            field, bound, bound
        ))),
    }
}
