//! Prefixed ID generation.
//!
//! Every persisted entity carries an opaque id of the form
//! `<prefix>-<8 hex chars>`, e.g. `usr-a3f8b2c1`.

/// Prefix for account ids.
pub const PREFIX_ACCOUNT: &str = "usr";
/// Prefix for identification record ids.
pub const PREFIX_RECORD: &str = "idn";

/// All known id prefixes.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_ACCOUNT, PREFIX_RECORD];

/// Generate a fresh prefixed id from 4 random bytes.
///
/// # Panics
///
/// Panics if the OS random source is unavailable.
#[must_use]
pub fn generate(prefix: &str) -> String {
    use std::fmt::Write;

    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).expect("OS random source should be available");
    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generate_correct_format() {
        let id = generate(PREFIX_ACCOUNT);
        assert!(id.starts_with("usr-"), "id should start with 'usr-': {id}");
        assert_eq!(
            id.len(),
            12,
            "id should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "random part should be hex: {hex_part}"
        );
    }

    #[test]
    fn generate_all_prefixes() {
        for prefix in ALL_PREFIXES {
            let id = generate(prefix);
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[test]
    fn generate_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = generate(PREFIX_RECORD);
            assert!(ids.insert(id.clone()), "duplicate id generated: {id}");
        }
    }
}
