// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literals and product terms.

use crate::config::Alphabet;
use std::{collections::BTreeSet, fmt, ops::Not};

/// A variable, optionally complemented.
///
/// Literals order by variable first, so a product's literals come out in alphabet order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub var: usize,
    pub negated: bool,
}

impl Literal {
    #[inline]
    pub fn positive(var: usize) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    #[inline]
    pub fn negative(var: usize) -> Self {
        Self { var, negated: true }
    }

    /// Returns the value of this literal when its variable is `value`.
    #[inline]
    pub fn evaluate(self, value: bool) -> bool {
        value != self.negated
    }

    #[inline]
    pub fn display<'a>(&self, alphabet: &'a Alphabet) -> LiteralDisplay<'a> {
        LiteralDisplay {
            literal: *self,
            alphabet,
        }
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

pub struct LiteralDisplay<'a> {
    literal: Literal,
    alphabet: &'a Alphabet,
}

impl<'a> fmt::Display for LiteralDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.alphabet.name(self.literal.var))?;
        if self.literal.negated {
            write!(f, "'")?;
        }
        Ok(())
    }
}

/// A conjunction of literals. The empty product is the constant 1.
///
/// Products order by their literals, in alphabet order: `A` before `A'` before `AB` before `B`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product {
    literals: BTreeSet<Literal>,
}

impl Product {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    #[inline]
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.literals
    }

    /// The number of literals, which is also the cost of the term.
    #[inline]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluates the product at `point`. Bit `width - 1 - var` of `point` is the value of `var`.
    pub fn evaluate(&self, point: u32, width: usize) -> bool {
        self.literals.iter().all(|lit| {
            debug_assert!(lit.var < width, "literal var {} out of range", lit.var);
            let value = (point >> (width - 1 - lit.var)) & 1 == 1;
            lit.evaluate(value)
        })
    }

    /// Complements every literal, as De Morgan's law does for a product turned into a sum.
    pub fn complement_literals(&self) -> Self {
        Self::new(self.literals.iter().map(|&lit| !lit))
    }

    #[inline]
    pub fn display<'a>(&'a self, alphabet: &'a Alphabet) -> ProductDisplay<'a> {
        ProductDisplay {
            product: self,
            alphabet,
        }
    }
}

pub struct ProductDisplay<'a> {
    product: &'a Product,
    alphabet: &'a Alphabet,
}

impl<'a> fmt::Display for ProductDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.product.is_empty() {
            return write!(f, "1");
        }
        for lit in self.product.literals() {
            write!(f, "{}", lit.display(self.alphabet))?;
        }
        Ok(())
    }
}
