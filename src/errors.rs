//! Errors

use thiserror::Error;

/// Calculator errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Both modes requested at once
    #[error("if --fout is specified, --rfreq, --hsdiv and --n1 can not be used")]
    ArgumentConflict,

    /// Neither a register triple nor an output frequency
    #[error("if --fout is not specified, --rfreq, --hsdiv and --n1 should be specified")]
    MissingArguments,

    /// No divider combination keeps the DCO inside its band
    #[error("FOUT out of range: no divider combination puts {fout} Hz within the DCO band")]
    OutOfRange { fout: f64 },

    /// A value could not be parsed
    #[error("invalid value '{value}' for --{option}: {reason}")]
    InvalidArgumentFormat {
        option: &'static str,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Creates an invalid argument error
    pub fn invalid(option: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidArgumentFormat {
            option,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Process exit status.
    /// 1 for bad arguments, 2 when there is no solution.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ArgumentConflict
            | Error::MissingArguments
            | Error::InvalidArgumentFormat { .. } => 1,
            Error::OutOfRange { .. } => 2,
        }
    }
}

/// Result alias for calculator operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_separate_bad_arguments_from_no_solution() {
        assert_eq!(Error::ArgumentConflict.exit_code(), 1);
        assert_eq!(Error::MissingArguments.exit_code(), 1);
        assert_eq!(Error::invalid("n1", "zz", "bad digit").exit_code(), 1);
        assert_eq!(Error::OutOfRange { fout: 1.0 }.exit_code(), 2);
    }

    #[test]
    fn invalid_argument_message_names_the_option() {
        let msg = Error::invalid("rfreq", "0xg", "invalid digit found in string").to_string();
        assert_eq!(msg, "invalid value '0xg' for --rfreq: invalid digit found in string");
    }
}
