//! Field-length precheck scan
//!
//! Walks the value one field at a time using index pairs. A field whose
//! length differs from the token's is rejected without comparing a single
//! unit; only equal-length fields are compared unit by unit.

use super::token_is_searchable;
use crate::string::{find_unit, CodeUnit};

/// Check whether any field of `value` equals `token`
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::length_precheck;
///
/// assert!(length_precheck::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!length_precheck::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if value.is_empty() || !token_is_searchable(token, delimiter) {
        return false;
    }

    let token_len = token.len();
    let mut field_start = 0;

    // A field starting past this point is too short to hold the token.
    while value.len() - field_start >= token_len {
        let field_end = find_unit(&value[field_start..], delimiter)
            .map_or(value.len(), |offset| field_start + offset);

        if field_end - field_start == token_len
            && value[field_start..field_end]
                .iter()
                .zip(token)
                .all(|(a, b)| a == b)
        {
            return true;
        }

        if field_end == value.len() {
            break;
        }
        field_start = field_end + 1;
    }

    false
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
    fn test_equal_length_different_content() {
        assert!(!check("Baz;Qux", "Bar"));
        assert!(check("Baz;Bar", "Bar"));
    }

    #[test]
    fn test_trailing_delimiter() {
        assert!(check("Bar;", "Bar"));
        assert!(!check("Foo;", "Bar"));
        assert!(!check("Ba;", "Bar"));
    }

    #[test]
    fn test_token_longer_than_value() {
        assert!(!check("Ba", "Bar"));
    }
}
