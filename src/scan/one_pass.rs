//! Single forward pass with a two-state machine
//!
//! Each unit of the value is read exactly once. No substring searches, no
//! re-scanning and no allocation, which makes this the default strategy.

use super::token_is_searchable;
use crate::string::CodeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Inside a field whose prefix so far equals `token[..matched]`
    MatchingToken { matched: usize },
    /// Inside a field already known not to match
    SkippingField,
}

/// Check whether any field of `value` equals `token`
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::one_pass;
///
/// assert!(one_pass::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!one_pass::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if value.is_empty() || !token_is_searchable(token, delimiter) {
        return false;
    }

    // The start of the value behaves like the unit after a delimiter.
    let mut state = State::MatchingToken { matched: 0 };

    for &unit in value {
        state = match state {
            State::MatchingToken { matched } if matched < token.len() => {
                if unit == token[matched] {
                    State::MatchingToken { matched: matched + 1 }
                } else if unit == delimiter {
                    // Field shorter than the token; the next field starts here.
                    State::MatchingToken { matched: 0 }
                } else {
                    State::SkippingField
                }
            }
            State::MatchingToken { .. } => {
                if unit == delimiter {
                    return true;
                }
                State::SkippingField
            }
            State::SkippingField => {
                if unit == delimiter {
                    State::MatchingToken { matched: 0 }
                } else {
                    State::SkippingField
                }
            }
        };
    }

    state == State::MatchingToken { matched: token.len() }
}
