//! Bounded compare-and-jump scan
//!
//! At each field start the value is compared with the token for at most the
//! token's length. On the first mismatch the cursor jumps past the next
//! delimiter instead of advancing by one unit, so every field is examined at
//! most once.

use super::token_is_searchable;
use crate::string::{find_unit, CodeUnit};

/// Check whether any field of `value` equals `token`
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::bounded;
///
/// assert!(bounded::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!bounded::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if value.is_empty() || !token_is_searchable(token, delimiter) {
        return false;
    }

    let length = value.len();
    let mut cursor = 0;

    loop {
        let mut matched = 0;
        while matched < token.len() && cursor < length && value[cursor] == token[matched] {
            cursor += 1;
            matched += 1;
        }

        if matched == token.len() && (cursor == length || value[cursor] == delimiter) {
            return true;
        }

        match find_unit(&value[cursor..], delimiter) {
            Some(offset) => cursor += offset + 1,
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str, token: &str) -> bool {
        contains_token(value.as_bytes(), token.as_bytes(), b';')
    }

    #[test]
    fn test_scenarios() {
        assert!(check("Foo;Bar", "Bar"));
        assert!(!check("Foo;FooBar;Whatever", "Foo"));
        assert!(!check("", "Bar"));
        assert!(!check("Bar", ""));
        assert!(check("Bar1;Bar2;Bar3;Bar4;Bar", "Bar"));
        assert!(!check("Bar1;Bar2;Bar3;Bar4;NoMatch", "Bar"));
    }

    #[test]
    fn test_mismatch_on_delimiter() {
        // The mismatching unit is itself the delimiter ending a short field.
        assert!(check("Ba;Bar", "Bar"));
        assert!(check(";Bar", "Bar"));
    }

    #[test]
    fn test_value_ends_mid_token() {
        assert!(!check("Foo;Ba", "Bar"));
    }

    #[test]
    fn test_prefix_match_then_longer_field() {
        assert!(!check("BarBar", "Bar"));
        assert!(check("BarBar;Bar", "Bar"));
    }
}
