//! Field iteration over delimited code-unit sequences

use super::CodeUnit;

/// Find the first occurrence of `unit` in `haystack`
#[inline]
pub fn find_unit<U: CodeUnit>(haystack: &[U], unit: U) -> Option<usize> {
    haystack.iter().position(|&u| u == unit)
}

/// Find the first raw occurrence of `needle` in `haystack`
///
/// An empty needle matches at position 0.
pub fn find_subslice<U: CodeUnit>(haystack: &[U], needle: &[U]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    if needle.len() == 1 {
        return find_unit(haystack, needle[0]);
    }

    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Iterator over the fields of a value split by a delimiter
///
/// Every delimiter ends a field, so `"a;;b"` yields `"a"`, `""`, `"b"` and
/// `"a;"` yields `"a"`, `""`. An empty value yields one empty field.
///
/// # Examples
///
/// ```rust
/// use fieldscan::string::Fields;
///
/// let fields: Vec<&[u8]> = Fields::new(b"Foo;FooBar;", b';').collect();
/// assert_eq!(fields, vec![&b"Foo"[..], &b"FooBar"[..], &b""[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct Fields<'a, U> {
    remainder: Option<&'a [U]>,
    delimiter: U,
}

impl<'a, U: CodeUnit> Fields<'a, U> {
    /// Split `value` at every `delimiter`
    #[inline]
    pub fn new(value: &'a [U], delimiter: U) -> Self {
        Self {
            remainder: Some(value),
            delimiter,
        }
    }
}

impl<'a, U: CodeUnit> Iterator for Fields<'a, U> {
    type Item = &'a [U];

    fn next(&mut self) -> Option<Self::Item> {
        let remainder = self.remainder?;

        match find_unit(remainder, self.delimiter) {
            Some(pos) => {
                self.remainder = Some(&remainder[pos + 1..]);
                Some(&remainder[..pos])
            }
            None => {
                self.remainder = None;
                Some(remainder)
            }
        }
    }
}
