//! Split-then-compare reference scan
//!
//! Materializes every field and compares each one to the token. This is the
//! simplest statement of the predicate and the oracle the other strategies
//! are tested against.

use crate::string::{CodeUnit, Fields};

/// Check whether any field of `value` equals `token`
///
/// # Examples
///
/// ```rust
/// use fieldscan::scan::split;
///
/// assert!(split::contains_token(b"Foo;Bar", b"Bar", b';'));
/// assert!(!split::contains_token(b"Foo;FooBar;Whatever", b"Foo", b';'));
/// ```
pub fn contains_token<U: CodeUnit>(value: &[U], token: &[U], delimiter: U) -> bool {
    if token.is_empty() || value.is_empty() {
        return false;
    }

    let fields: Vec<&[U]> = Fields::new(value, delimiter).collect();
    fields.into_iter().any(|field| field == token)
}
