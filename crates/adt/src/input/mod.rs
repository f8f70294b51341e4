pub mod edgelist;

pub use edgelist::EdgeList;
pub use edgelist::EdgeListInput;

use std::rc::Rc;
use std::sync::Arc;

use atoi::FromRadix10SignedChecked;

use crate::label::Label;

pub struct InputPath<P>(pub(crate) P);

pub trait InputCapabilities<L: Label> {
    type GraphInput: Into<EdgeList<L>>;
}

/// Used by input formats to read vertex labels from bytes.
pub trait ParseLabel: Label {
    /// Parses a label from a whitespace-free token.
    ///
    /// # Example
    ///
    /// ```
    /// use graph_adt::input::ParseLabel;
    ///
    /// assert_eq!(u32::parse(b"1337"), Some(1337));
    /// assert_eq!(u32::parse(b"13x7"), None);
    /// assert_eq!(String::parse(b"A"), Some(String::from("A")));
    /// ```
    ///
    /// # Return
    ///
    /// Returns `None` if the whole token does not form a valid label.
    fn parse(bytes: &[u8]) -> Option<Self>;
}

/// Parses an integer that spans the whole of `bytes`.
pub(crate) fn parse_integer<T: FromRadix10SignedChecked>(bytes: &[u8]) -> Option<T> {
    match T::from_radix_10_signed_checked(bytes) {
        (Some(n), used) if used == bytes.len() && bytes.last().is_some_and(u8::is_ascii_digit) => {
            Some(n)
        }
        _ => None,
    }
}

macro_rules! impl_parse_integer_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::input::ParseLabel for $ty {
                fn parse(bytes: &[u8]) -> Option<Self> {
                    $crate::input::parse_integer(bytes)
                }
            }
        )+
    };
}

macro_rules! impl_parse_str_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::input::ParseLabel for $ty {
                fn parse(bytes: &[u8]) -> Option<Self> {
                    ::std::str::from_utf8(bytes)
                        .ok()
                        .filter(|s| !s.is_empty())
                        .map(<$ty>::from)
                }
            }
        )+
    };
}

impl_parse_integer_label!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl_parse_str_label!(String, Box<str>, Rc<str>, Arc<str>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_labels() {
        assert_eq!(u64::parse(b"42"), Some(42));
        assert_eq!(i32::parse(b"-7"), Some(-7));
        assert_eq!(u8::parse(b"256"), None);
        assert_eq!(u32::parse(b"-1"), None);
        assert_eq!(u32::parse(b""), None);
        assert_eq!(i32::parse(b"-"), None);
    }

    #[test]
    fn parse_string_labels() {
        assert_eq!(Arc::<str>::parse(b"vertex"), Some(Arc::from("vertex")));
        assert_eq!(String::parse(&[0xff, 0xfe]), None);
        assert_eq!(String::parse(b""), None);
    }
}
