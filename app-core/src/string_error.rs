//! Conversion of arbitrary errors into the `String` errors used throughout
//! the application layer.

use std::fmt::Debug;

pub trait ErrorStringExt<T> {
    /// Replace the error with `msg`, followed by the debug representation of
    /// the original error.
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E> ErrorStringExt<T> for Result<T, E>
where
    E: Debug,
{
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| format!("{msg}: {err:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_to_string_keeps_ok() {
        let res: Result<u32, std::num::ParseIntError> = "42".parse::<u32>();
        assert_eq!(res.err_to_string("unused"), Ok(42));
    }

    #[test]
    fn test_err_to_string_prefixes_message() {
        let res = "x".parse::<u32>().err_to_string("could not parse width");
        let err = res.unwrap_err();
        assert!(err.starts_with("could not parse width: "));
        assert!(err.contains("InvalidDigit"));
    }
}
