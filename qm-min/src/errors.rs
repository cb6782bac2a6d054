// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors returned by the minimizer.

use thiserror::Error;

/// The result of a minimizer operation.
pub type Result<T> = std::result::Result<T, MinimizeError>;

/// Error returned when a function could not be minimized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MinimizeError {
    /// The expression could not be parsed.
    #[error("invalid expression: {0}")]
    Parse(#[from] ParseError),

    /// The function needs more variables than the configured alphabet provides.
    #[error("function needs {needed} variables but the alphabet only has {available}")]
    AlphabetTooSmall { needed: usize, available: usize },
}

/// Error returned when parsing an expression of the form `m(...)+d(...)` failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The expression is missing its `m(...)` or `d(...)` group, or a group is unbalanced.
    #[error("expected `{expected}(...)` but found `{found}`")]
    MalformedGroup { expected: char, found: String },

    /// Something follows the `d(...)` group.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),

    /// A list contains two consecutive commas or a dangling comma.
    #[error("empty entry in list `{0}`")]
    EmptyToken(String),

    /// A token is not a non-negative integer.
    #[error("`{0}` is not a non-negative integer")]
    NonNumeric(String),

    /// A range is missing one of its bounds.
    #[error("malformed range `{0}`")]
    MalformedRange(String),

    /// A range has its lower bound above its upper bound.
    #[error("range {lo}-{hi} has its lower bound above its upper bound")]
    InvertedRange { lo: u32, hi: u32 },

    /// A value needs more variables than the minimizer supports. `value` is the text as
    /// written, since it may not fit in any integer type.
    #[error("value {value} needs more than {max} variables")]
    TooManyVariables { value: String, max: usize },
}

/// Error returned when an [`Alphabet`](crate::config::Alphabet) could not be built.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    /// No variable names were given.
    #[error("alphabet is empty")]
    Empty,

    /// More names than the maximum variable count were given.
    #[error("alphabet has {len} names but at most {max} are supported")]
    TooLong { len: usize, max: usize },

    /// The same name appears twice.
    #[error("variable name `{0}` appears more than once")]
    Duplicate(char),

    /// The name clashes with the complement marker or expression punctuation.
    #[error("`{0}` cannot be used as a variable name")]
    Reserved(char),
}
