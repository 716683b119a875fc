//! Occurrence re-scan
//!
//! Repeatedly finds the next raw occurrence of the token and accepts it only
//! when both of its ends sit on a field boundary. The search index strictly
//! increases, so the scan always terminates.

use super::token_is_searchable;
use crate::string::{find_subslice, CodeUnit};

/// Check whether any field of `value` equals `token`
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::occurrence;
///
/// assert!(occurrence::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!occurrence::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if value.is_empty() || !token_is_searchable(token, delimiter) || token.len() > value.len() {
        return false;
    }

    let token_len = token.len();
    // Start index of an occurrence that ends exactly at the end of the value.
    let end_index = value.len() - token_len;
    let mut search_from = 0;

    while search_from <= end_index {
        let Some(offset) = find_subslice(&value[search_from..], token) else {
            return false;
        };
        let index = search_from + offset;

        let starts_field = index == 0 || value[index - 1] == delimiter;
        let ends_field = index == end_index || value[index + token_len] == delimiter;
        if starts_field && ends_field {
            return true;
        }

        search_from = index + 1;
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
    fn test_occurrence_inside_field() {
        assert!(!check("FooBarBaz", "Bar"));
        assert!(!check("xBar;Barx", "Bar"));
        assert!(check("xBar;Barx;Bar", "Bar"));
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert!(check("aaa;aa", "aa"));
        assert!(!check("aaa;aaa", "aa"));
    }
}
