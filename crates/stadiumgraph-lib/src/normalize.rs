//! Canonical stadium keys.
//!
//! Free-text stadium names arrive from CSV files and from user queries with
//! inconsistent case, punctuation and dash characters. [`normalize_name`]
//! folds all of them onto a single ASCII key so that `"Dodger Stadium"`,
//! `"DODGER-STADIUM"` and `"dodger – stadium"` address the same node.

use tracing::debug;

/// Dash variants folded to an ASCII hyphen before stripping.
const UNICODE_DASHES: [char; 4] = [
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
];

/// Normalize a raw stadium name into its canonical key.
///
/// Returns `None` when the name is blank or contains no ASCII letters or
/// digits. The result is idempotent: normalizing a canonical key returns it
/// unchanged.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        debug!("blank stadium name supplied");
        return None;
    }

    let folded: String = trimmed
        .to_lowercase()
        .chars()
        .map(|c| if UNICODE_DASHES.contains(&c) { '-' } else { c })
        .collect();

    let key: String = folded
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if key.is_empty() {
        debug!(name, "stadium name became empty after normalization");
        return None;
    }

    Some(key)
}

/// Whether `key` is blank once surrounding whitespace is ignored.
///
/// Canonical keys never satisfy this; it exists for the maintenance routines
/// that repair entries inserted without normalization.
pub(crate) fn is_blank_key(key: &str) -> bool {
    key.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize_name("Dodger Stadium").as_deref(),
            Some("dodgerstadium")
        );
        assert_eq!(
            normalize_name("DODGER-STADIUM").as_deref(),
            Some("dodgerstadium")
        );
        assert_eq!(
            normalize_name("  Oriole Park at Camden Yards!  ").as_deref(),
            Some("orioleparkatcamdenyards")
        );
    }

    #[test]
    fn unicode_dashes_never_survive() {
        for dash in UNICODE_DASHES {
            let raw = format!("Guaranteed{dash}Rate Field");
            assert_eq!(
                normalize_name(&raw).as_deref(),
                Some("guaranteedratefield"),
                "dash {dash:?} should be removed"
            );
        }
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(
            normalize_name("Citi Field 2009").as_deref(),
            Some("citifield2009")
        );
    }

    #[test]
    fn blank_or_symbol_only_names_are_invalid() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   \t"), None);
        assert_eq!(normalize_name("--- !!"), None);
        assert_eq!(normalize_name("\u{2014}"), None);
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(
            normalize_name("Estadio Béisbol").as_deref(),
            Some("estadiobisbol")
        );
        assert_eq!(normalize_name("東京ドーム"), None);
    }

    #[test]
    fn canonical_keys_are_fixed_points() {
        let key = normalize_name("Wrigley Field").expect("valid name");
        assert_eq!(normalize_name(&key), Some(key));
    }

    #[test]
    fn blank_key_detection() {
        assert!(is_blank_key(""));
        assert!(is_blank_key("  "));
        assert!(!is_blank_key("fenwaypark"));
    }
}
