// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// Value returned by [crate::ParseResult::code] for every kind of [Failure].
pub const INVALID_CODE: i32 = '?' as i32;

/// Reason an option on the command line could not be handled.
///
/// All variants are reported to `getopt_long(3)`-style callers as the single
/// [INVALID_CODE] value; the variant is only there for callers that want to
/// say _why_.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Failure {
    /// The option is not in the short option specification or the long
    /// option table (or is the reserved `:` letter, or a lone `-`).
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    /// An option that needs an argument was bundled with other letters
    /// (`-ax` where `a` takes an argument).
    #[error("option requires an argument and cannot be clustered -- '{0}'")]
    ClusteredArgument(char),

    /// The option needs an argument but it was the last argument.
    #[error("option '{0}' requires an argument")]
    MissingArgument(String),
}

/// The error type.
///
/// Only produced for conditions the parser cannot recover from. User errors
/// on the command line are reported as a [Failure] instead.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Scratch space for reordering the arguments could not be allocated.
    #[error("cannot allocate space to move {len} non-option arguments")]
    Alloc {
        /// Number of arguments that needed to be moved.
        len: usize,
    },

    /// An attempt was made to move arguments outside the argument vector.
    /// This can only happen if a parsing session is continued with a
    /// different argument vector.
    #[error("cannot move {count} arguments from index {start} of {len}")]
    Permute {
        /// Index of the first argument to move.
        start: usize,
        /// Number of arguments to move.
        count: usize,
        /// Length of the argument vector.
        len: usize,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        #[derive(Debug)]
        struct TestData<'a> {
            failure: Failure,
            display: &'a str,
        }

        let tests = &[
            TestData {
                failure: Failure::UnknownOption("-x".into()),
                display: "unrecognized option '-x'",
            },
            TestData {
                failure: Failure::UnknownOption("--wibble".into()),
                display: "unrecognized option '--wibble'",
            },
            TestData {
                failure: Failure::ClusteredArgument('a'),
                display: "option requires an argument and cannot be clustered -- 'a'",
            },
            TestData {
                failure: Failure::MissingArgument("--level".into()),
                display: "option '--level' requires an argument",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let value = format!("{}", d.failure);

            let msg = format!("test[{}]: {:?}, value: {:?}", i, d, value);

            assert_eq!(value, d.display, "{}", msg);
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::Alloc { len: 3 };

        assert_eq!(
            err.to_string(),
            "cannot allocate space to move 3 non-option arguments"
        );

        let err = Error::Permute {
            start: 4,
            count: 2,
            len: 5,
        };

        assert_eq!(err.to_string(), "cannot move 2 arguments from index 4 of 5");
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(INVALID_CODE, 63);
    }
}
