//! # Token Units
//!
//! Conversion between raw on-chain token quantities and display strings.
//!
//! Token contracts store balances as unsigned 256-bit integers in the token's
//! smallest unit. A token with `decimals = d` displays `raw / 10^d`.

use primitive_types::U256;

/// Render a raw token quantity with exactly `decimals` fraction digits.
///
/// No rounding and no trailing-zero trimming is applied, so the output always
/// shows the precision the token declares. A token with zero decimals renders
/// as a plain integer.
///
/// # Examples
///
/// ```rust
/// use lib_utils::units::format_units;
/// use primitive_types::U256;
///
/// assert_eq!(format_units(U256::from(500u64), 2), "5.00");
/// assert_eq!(format_units(U256::from(5u64), 3), "0.005");
/// assert_eq!(format_units(U256::from(42u64), 0), "42");
/// ```
pub fn format_units(raw: U256, decimals: u32) -> String {
    let digits = raw.to_string();
    if decimals == 0 {
        return digits;
    }

    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    format!("{}.{}", integer, fraction)
}

/// Parse a hex quantity as returned by JSON-RPC indexers (`0x` prefix optional).
///
/// `"0x"` on its own is read as zero. Leading zeros are accepted, which covers
/// the fixed-width 32-byte encoding some indexers use.
pub fn parse_quantity(quantity: &str) -> Result<U256, String> {
    let trimmed = quantity.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_str_radix(hex, 16).map_err(|e| format!("invalid quantity {:?}: {:?}", quantity, e))
}
