//! Pack-quantity parsing from product titles.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A number immediately followed (whitespace allowed) by a count token
    static ref PACK_QUANTITY: Regex = Regex::new(
        r"(?i)(\d+)\s*(?:count|pack|pcs|pieces|ct)\b"
    ).unwrap();
}

/// Parse an approximate package quantity out of a product title.
///
/// The first match wins; a title with no matching token yields `None`.
pub fn parse_pack_quantity(title: &str) -> Option<u32> {
    PACK_QUANTITY
        .captures(title)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_token() {
        assert_eq!(parse_pack_quantity("Widget Pack of 24 count"), Some(24));
    }

    #[test]
    fn test_all_tokens() {
        assert_eq!(parse_pack_quantity("AA Batteries 48 Count"), Some(48));
        assert_eq!(parse_pack_quantity("Socks 6 Pack"), Some(6));
        assert_eq!(parse_pack_quantity("Screws 100 pcs"), Some(100));
        assert_eq!(parse_pack_quantity("Napkins 250 pieces"), Some(250));
        assert_eq!(parse_pack_quantity("Gum 12ct"), Some(12));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(parse_pack_quantity("2 pack of 100 count wipes"), Some(2));
    }

    #[test]
    fn test_no_token_is_none() {
        assert_eq!(parse_pack_quantity("Blue Widget"), None);
        assert_eq!(parse_pack_quantity("Pack of 6"), None);
        assert_eq!(parse_pack_quantity(""), None);
    }

    #[test]
    fn test_token_must_terminate() {
        // "packet" is not a pack token
        assert_eq!(parse_pack_quantity("24 packets of sauce"), None);
    }
}
