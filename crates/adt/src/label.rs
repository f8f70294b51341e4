use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// An opaque identifier naming a vertex.
///
/// Labels are compared by value and are used as keys in the internal maps and
/// sets of every graph representation. `Ord` is only used to render graphs
/// deterministically.
pub trait Label: Clone + Eq + Hash + Ord + Debug + Display + 'static {
    /// Returns `false` if this value must never name a vertex.
    ///
    /// Graphs reject invalid labels with [`crate::Error::InvalidLabel`]
    /// before mutating any state.
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! impl_label {
    ($($TYPE:ty),+ $(,)?) => {
        $(
            impl Label for $TYPE {}
        )+
    };
}

macro_rules! impl_str_label {
    ($($TYPE:ty),+ $(,)?) => {
        $(
            impl Label for $TYPE {
                #[inline]
                fn is_valid(&self) -> bool {
                    !self.is_empty()
                }
            }
        )+
    };
}

impl_label!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl_str_label!(String, &'static str, Box<str>, Rc<str>, Arc<str>);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_strings_are_invalid() {
        assert!(!"".is_valid());
        assert!(!String::new().is_valid());
        assert!(!Arc::<str>::from("").is_valid());
    }

    #[test]
    fn non_empty_strings_are_valid() {
        assert!("A".is_valid());
        assert!(String::from("vertex").is_valid());
        assert!(Box::<str>::from(" ").is_valid());
    }

    #[test]
    fn integers_are_always_valid() {
        assert!(0_u32.is_valid());
        assert!((-1_i64).is_valid());
        assert!('x'.is_valid());
    }
}
