//! # VIN Validation
//!
//! Structural check on the vehicle identification number, the natural key of
//! the vehicle collection. The policy is deliberately strict where pagination
//! is forgiving: a malformed VIN is rejected with a client error before the
//! store is touched, while bad paging input falls back to defaults (see
//! `pagination`).

/// Expected VIN length in characters.
pub const VIN_LEN: usize = 6;

/// Returns true iff `vin` is exactly [`VIN_LEN`] characters.
///
/// Never errors; any other shape is simply invalid.
pub fn is_valid_vin(vin: &str) -> bool {
    vin.chars().count() == VIN_LEN
}
