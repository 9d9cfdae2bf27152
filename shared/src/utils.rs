//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for shortening account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` plus four leading and four trailing hex digits
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
//! assert_eq!(format_address(address, 6, 4), "0xd8dA...6045");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to shorten, or is not ASCII, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
/// assert_eq!(format_address(addr, 6, 4), "0xd8dA...6045");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Byte slicing below is only safe on ASCII input; user-typed text may not be
    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four leading and four trailing hex digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
/// assert_eq!(truncate_address(addr), "0xd8dA...6045");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
