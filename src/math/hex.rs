use crate::error::ContrastError;

/// Normalize user input to a canonical `#rrggbb` lowercase color.
/// Accepts a missing `#` and 3-digit shorthand (`#abc` -> `#aabbcc`).
/// Anything else that isn't exactly 6 hex digits is `InvalidColorFormat`.
pub fn normalize_hex(raw: &str) -> Result<String, ContrastError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() == 6 && expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(format!("#{}", expanded.to_ascii_lowercase()))
    } else {
        Err(ContrastError::InvalidColorFormat(raw.to_string()))
    }
}

/// Parse a strict `#rrggbb` string to RGB channels (0-255).
/// No shorthand, no missing `#`; run `normalize_hex` first for user input.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ContrastError> {
    let invalid = || ContrastError::InvalidColorFormat(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(hex_to_rgb("#ff0000"), Ok((255, 0, 0)));
        assert_eq!(hex_to_rgb("#00ff00"), Ok((0, 255, 0)));
        assert_eq!(hex_to_rgb("#1e293b"), Ok((30, 41, 59)));
        assert_eq!(hex_to_rgb("#CA8B8A"), Ok((202, 139, 138)));
    }

    #[test]
    fn parse_rejects_non_canonical() {
        for bad in ["ff0000", "#f00", "#ff000080", "#xyzxyz", "", "#", "#ff00ö"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(ContrastError::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn normalize_canonical_is_idempotent() {
        assert_eq!(normalize_hex("#ffffff").as_deref(), Ok("#ffffff"));
        let once = normalize_hex("#Ca8B8a").unwrap();
        assert_eq!(once, "#ca8b8a");
        assert_eq!(normalize_hex(&once), Ok(once.clone()));
    }

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(normalize_hex("#fff").as_deref(), Ok("#ffffff"));
        assert_eq!(normalize_hex("#abc").as_deref(), Ok("#aabbcc"));
        assert_eq!(normalize_hex("ABC").as_deref(), Ok("#aabbcc"));
    }

    #[test]
    fn normalize_adds_prefix_and_trims() {
        assert_eq!(normalize_hex("ca8b8a").as_deref(), Ok("#ca8b8a"));
        assert_eq!(normalize_hex("  #010000\n").as_deref(), Ok("#010000"));
    }

    #[test]
    fn normalize_rejects_garbage() {
        for bad in ["zzzzzz", "", "#xyz", "#12", "#1234", "#12345", "#1234567", "##fff", "   "] {
            assert_eq!(
                normalize_hex(bad),
                Err(ContrastError::InvalidColorFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }
}
