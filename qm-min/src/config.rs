// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::AlphabetError;
use arrayvec::ArrayVec;
use std::fmt;

/// The maximum number of variables a function can have.
pub const MAX_VARIABLES: usize = 10;

/// Variable names used when no alphabet is configured.
pub const DEFAULT_VARIABLE_NAMES: [char; MAX_VARIABLES] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

const RESERVED: [char; 7] = ['\'', '+', '(', ')', ',', '-', ' '];

/// An ordered list of variable names. Position `i` names cube position `i`.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: ArrayVec<char, MAX_VARIABLES>,
}

impl Alphabet {
    pub fn new(names: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let names: Vec<char> = names.into_iter().collect();
        if names.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if names.len() > MAX_VARIABLES {
            return Err(AlphabetError::TooLong {
                len: names.len(),
                max: MAX_VARIABLES,
            });
        }

        let mut checked: ArrayVec<char, MAX_VARIABLES> = ArrayVec::new();
        for name in names {
            if RESERVED.contains(&name) || name.is_whitespace() {
                return Err(AlphabetError::Reserved(name));
            }
            if checked.contains(&name) {
                return Err(AlphabetError::Duplicate(name));
            }
            checked.push(name);
        }

        Ok(Self { names: checked })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name of the variable at `ix`.
    ///
    /// Panics if `ix` is out of range.
    #[inline]
    pub fn name(&self, ix: usize) -> char {
        self.names[ix]
    }

    #[inline]
    pub fn names(&self) -> &[char] {
        &self.names
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            names: DEFAULT_VARIABLE_NAMES.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&self.names.iter().collect::<String>())
            .finish()
    }
}

/// Configuration for a [`Minimizer`](crate::minimize::Minimizer).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinimizerConfig {
    pub alphabet: Alphabet,
}

impl MinimizerConfig {
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}
