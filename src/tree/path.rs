//! Path normalization for deterministic leaf identifiers

use unicode_normalization::UnicodeNormalization;

/// Normalize a path string for use as a leaf identifier.
///
/// Applies Unicode NFC so that byte-different but canonically-equal paths
/// hash identically across platforms, and strips trailing slashes (except a
/// bare root).
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();

    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    result
}
