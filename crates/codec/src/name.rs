//! Textual domain-name helpers.

use hickory_proto::rr::Name;

/// Case-insensitive, length-exact comparison of two presentation-form names.
///
/// Only `A`-`Z` are folded; every other byte, including non-ASCII ones,
/// must match exactly. Trailing dots are not normalized.
pub fn equal_ascii_name(x: &str, y: &str) -> bool {
    x.len() == y.len()
        && x
            .bytes()
            .zip(y.bytes())
            .all(|(a, b)| a.to_ascii_lowercase() == b.to_ascii_lowercase())
}

/// Lower-case, fully-qualified ASCII form used as a chain-membership key.
pub fn canonical_name(name: &Name) -> String {
    let mut canonical = name.to_lowercase();
    canonical.set_fqdn(true);
    canonical.to_ascii()
}
