use csscolorparser::Color;

use crate::error::ContrastError;

/// Convert any opaque CSS color value to canonical `#rrggbb`.
/// Handles: hex (3/6 digit, `#` optional), rgb, hsl, hwb, named colors.
/// Rejects: transparent, inherit, currentColor, translucent colors, unrecognized.
pub fn to_hex(value: &str) -> Result<String, ContrastError> {
    if let Ok(hex) = super::hex::normalize_hex(value) {
        return Ok(hex);
    }

    let invalid = || ContrastError::InvalidColorFormat(value.to_string());
    let trimmed = value.trim();

    // Keywords with no concrete color of their own
    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return Err(invalid()),
        _ => {}
    }

    let color = trimmed.parse::<Color>().map_err(|_| invalid())?;
    let [r, g, b, a] = color.to_rgba8();
    if a < 255 {
        return Err(invalid());
    }
    Ok(format!("#{:02x}{:02x}{:02x}", r, g, b))
}
