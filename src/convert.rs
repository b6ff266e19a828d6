//! String-to-value conversion for leaf fields.
//!
//! Built-in impls cover strings, integers, and booleans. Any other type can
//! take full control of its own parsing by implementing [`FromConfig`].

/// The error produced by a failed conversion.
pub type ConvertError = Box<dyn std::error::Error + Send + Sync>;

/// Construct a value from its resolved configuration string.
pub trait FromConfig: Sized {
    fn from_config(value: &str) -> Result<Self, ConvertError>;
}

impl FromConfig for String {
    fn from_config(value: &str) -> Result<Self, ConvertError> {
        Ok(value.to_string())
    }
}

impl FromConfig for bool {
    fn from_config(value: &str) -> Result<Self, ConvertError> {
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("invalid boolean \"{value}\"").into())
        }
    }
}

macro_rules! integer_from_config {
    ($($ty:ty),* $(,)?) => {$(
        impl FromConfig for $ty {
            fn from_config(value: &str) -> Result<Self, ConvertError> {
                value.parse::<$ty>().map_err(Into::into)
            }
        }
    )*};
}

integer_from_config!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
