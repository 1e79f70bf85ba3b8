use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake from a string ID
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed the snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - The string is not a valid `u64`
pub fn parse_u64_from_str(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}
