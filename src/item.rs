//! Item - the single persisted record type
//!
//! An item is immutable once created: the crate exposes no update or
//! delete operations, only insert and fetch-all.

use serde::{Deserialize, Serialize};

/// One entry in the pantry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier auto-assigned by the store (SQLite rowid)
    pub id: i64,
    /// Display name, non-empty after trimming
    pub name: String,
    /// How many of the thing there are
    pub quantity: i64,
}

/// Parse the quantity text field as a strict base-10 integer.
///
/// Surrounding whitespace is tolerated; anything else is not. Partial
/// numeric strings such as `"12abc"` are rejected rather than parsed to
/// their leading digits. Negative values parse.
pub fn parse_quantity(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_quantity("5"), Some(5));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity("-3"), Some(-3));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_quantity(" 7 "), Some(7));
        assert_eq!(parse_quantity("\t12\n"), Some(12));
    }

    #[test]
    fn test_parse_rejects_partial_numeric() {
        assert_eq!(parse_quantity("12abc"), None);
        assert_eq!(parse_quantity("1 2"), None);
        assert_eq!(parse_quantity("3.5"), None);
    }

    #[test]
    fn test_parse_rejects_empty_and_non_numeric() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
        assert_eq!(parse_quantity("many"), None);
    }
}
