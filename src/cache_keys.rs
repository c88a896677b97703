//! Cache key construction for scored profiles.
//!
//! Keys are built here rather than inline in controllers so the profile
//! and factors endpoints cannot drift apart.

pub const PROFILE_PREFIX: &str = "profile";

/// Addresses are case-normalized so mixed-case queries share one entry.
pub fn profile_key(address: &str) -> String {
    format!("{}_{}", PROFILE_PREFIX, address.to_lowercase())
}
