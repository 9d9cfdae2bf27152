//! Validation utilities for user input

use tiny_keccak::{Hasher, Keccak};

/// Length of an address including the `0x` prefix.
const ADDRESS_LEN: usize = 42;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate an EVM account address.
///
/// Accepts `0x` followed by 40 hex digits. All-lowercase and all-uppercase
/// hex is taken as is; mixed case must carry a correct EIP-55 checksum.
/// Pure: never touches the network.
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    let Some(hex) = address.strip_prefix("0x") else {
        return ValidationResult::err("Address must start with 0x");
    };

    if address.len() != ADDRESS_LEN {
        return ValidationResult::err("Address must be 0x followed by 40 hex digits");
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return ValidationResult::err("Address contains non-hex characters");
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && checksum_hex(hex) != hex {
        return ValidationResult::err("Address checksum mismatch");
    }

    ValidationResult::ok()
}

/// Shorthand for `validate_address(address).is_valid`.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_valid
}

/// EIP-55 checksummed form of a structurally valid address.
///
/// Returns `None` when `address` is not `0x` + 40 hex digits. The case of
/// the input is ignored.
pub fn to_checksum_address(address: &str) -> Option<String> {
    let hex = address.strip_prefix("0x")?;
    if address.len() != ADDRESS_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("0x{}", checksum_hex(hex)))
}

// Uppercase each letter whose nibble in keccak256(lowercase hex) is >= 8.
fn checksum_hex(hex: &str) -> String {
    let lower = hex.to_ascii_lowercase();

    let mut hash = [0u8; 32];
    let mut keccak = Keccak::v256();
    keccak.update(lower.as_bytes());
    keccak.finalize(&mut hash);

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_valid_checksummed_addresses() {
        for address in CHECKSUMMED {
            assert!(is_valid_address(address), "{} should be valid", address);
        }
    }

    #[test]
    fn test_single_case_skips_checksum() {
        assert!(is_valid_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(is_valid_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
        assert!(is_valid_address("0x0000000000000000000000000000000000000001"));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // Last letter's case flipped
        let result = validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Address checksum mismatch"));
    }

    #[test]
    fn test_structural_errors() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("not-an-address"));
        assert!(!is_valid_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_valid_address("0X5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(!is_valid_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea"));
        assert!(!is_valid_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00"));
        assert!(!is_valid_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaeg"));
        assert!(!is_valid_address(" 0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert!(!is_valid_address("0xé5aeb6053f3e94c9b9a09f33669435e7ef1bea"));
    }

    #[test]
    fn test_to_checksum_address() {
        for address in CHECKSUMMED {
            let lower = address.to_ascii_lowercase();
            assert_eq!(to_checksum_address(&lower).as_deref(), Some(address));
        }
        assert_eq!(to_checksum_address("0x1234"), None);
    }
}
