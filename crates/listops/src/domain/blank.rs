//! Blank value checks
//!
//! A value is blank when it is absent, or when it is text with nothing but
//! whitespace in it. Numbers and booleans are never blank.

/// Values that can be checked for blankness
pub trait Blank {
    /// Returns true if the value counts as absent or empty
    fn is_blank(&self) -> bool;
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(|value| value.is_blank())
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(
            impl Blank for $ty {
                #[inline]
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

/// Returns true if any of the arguments is blank
pub fn are_any_blank(args: &[&dyn Blank]) -> bool {
    args.iter().any(|arg| arg.is_blank())
}
