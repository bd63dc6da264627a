use crate::server::error::AppError;

/// Parses a `#RRGGBB` colour into its 24-bit value.
pub fn parse_hex_color(value: &str) -> Result<u32, AppError> {
    let invalid = || AppError::BadRequest(format!("'{}' is not a #RRGGBB colour", value));

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 {
        return Err(invalid());
    }

    u32::from_str_radix(hex, 16).map_err(|_| invalid())
}
