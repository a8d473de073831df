//! Hex colour strings to normalized channel triples.

use glam::DVec3;

use crate::error::PrefabError;

/// Convert `"#RRGGBB"` or `"RRGGBB"` to a colour with each channel in
/// `0.0..=1.0`.
///
/// Permissive: a channel pair that is missing or not valid hex reads as 0.
/// Use [`try_hex_color_to_normalized`] to reject malformed input instead.
pub fn hex_color_to_normalized(hex: &str) -> DVec3 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    DVec3::new(channel(digits, 0), channel(digits, 2), channel(digits, 4))
}

fn channel(digits: &str, start: usize) -> f64 {
    let byte = digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0);
    f64::from(byte) / 255.0
}

/// Strict variant of [`hex_color_to_normalized`]: the input must be exactly
/// six hex digits after an optional leading `#`.
pub fn try_hex_color_to_normalized(hex: &str) -> Result<DVec3, PrefabError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PrefabError::MalformedHexColour {
            value: hex.to_string(),
        });
    }
    Ok(hex_color_to_normalized(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colours() {
        assert_eq!(hex_color_to_normalized("#FF0000"), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(hex_color_to_normalized("00FF00"), DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(hex_color_to_normalized("#0000ff"), DVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn channels_divide_by_255() {
        let c = hex_color_to_normalized("80FF33");
        assert_eq!(c.x, 128.0 / 255.0);
        assert_eq!(c.y, 1.0);
        assert_eq!(c.z, 51.0 / 255.0);
    }

    #[test]
    fn malformed_input_reads_as_zero_channels() {
        // Too short: only the red pair is present.
        assert_eq!(hex_color_to_normalized("FF"), DVec3::new(1.0, 0.0, 0.0));
        // Non-hex red pair.
        assert_eq!(hex_color_to_normalized("zz1122"), DVec3::new(0.0, 17.0 / 255.0, 34.0 / 255.0));
        assert_eq!(hex_color_to_normalized(""), DVec3::ZERO);
    }

    #[test]
    fn strict_variant_rejects_malformed_input() {
        assert!(try_hex_color_to_normalized("FF").is_err());
        assert!(try_hex_color_to_normalized("#12345").is_err());
        assert!(try_hex_color_to_normalized("#1234567").is_err());
        assert!(try_hex_color_to_normalized("gg0000").is_err());
    }

    #[test]
    fn strict_variant_agrees_on_valid_input() {
        let hex = "#ABCDEF";
        assert_eq!(
            try_hex_color_to_normalized(hex).unwrap(),
            hex_color_to_normalized(hex)
        );
    }
}
