// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::MAX_VARIABLES, errors::ParseError};
use itertools::Itertools;
use log::warn;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// A single-output function given by its minterms and don't-care terms.
///
/// Parsed from expressions of the form `m(1,2,5-7)+d(3)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction {
    minterms: BTreeSet<u32>,
    dont_cares: BTreeSet<u32>,
    variable_count: usize,
}

impl LogicFunction {
    /// Builds a function from its minterms and don't-cares.
    ///
    /// A value listed both ways is kept as a minterm.
    pub fn new(
        minterms: impl IntoIterator<Item = u32>,
        dont_cares: impl IntoIterator<Item = u32>,
    ) -> Result<Self, ParseError> {
        let minterms: BTreeSet<u32> = minterms.into_iter().collect();
        let mut dont_cares: BTreeSet<u32> = dont_cares.into_iter().collect();

        if let Some(&value) = minterms.iter().chain(&dont_cares).find(|&&v| v > max_value()) {
            return Err(ParseError::TooManyVariables {
                value: value.to_string(),
                max: MAX_VARIABLES,
            });
        }

        let overlap: Vec<u32> = dont_cares.intersection(&minterms).copied().collect();
        if !overlap.is_empty() {
            warn!(
                "values {:?} are both minterms and don't-cares, treating them as minterms",
                overlap
            );
            dont_cares.retain(|v| !minterms.contains(v));
        }

        let max = minterms.iter().chain(&dont_cares).max().copied().unwrap_or(0);
        let variable_count = ((u32::BITS - max.leading_zeros()) as usize).max(1);

        Ok(Self {
            minterms,
            dont_cares,
            variable_count,
        })
    }

    #[inline]
    pub fn minterms(&self) -> &BTreeSet<u32> {
        &self.minterms
    }

    #[inline]
    pub fn dont_cares(&self) -> &BTreeSet<u32> {
        &self.dont_cares
    }

    /// The number of bits needed for the largest minterm or don't-care, at least 1.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Every value in `0..2^variable_count` that is not a minterm.
    ///
    /// Don't-cares are included.
    pub fn maxterms(&self) -> BTreeSet<u32> {
        (0..1_u32 << self.variable_count)
            .filter(|v| !self.minterms.contains(v))
            .collect()
    }

    /// Returns true if `point` is a don't-care of this function.
    #[inline]
    pub fn is_dont_care(&self, point: u32) -> bool {
        self.dont_cares.contains(&point)
    }
}

impl FromStr for LogicFunction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let (minterms, rest) = take_group(&expr, 'm')?;
        let dont_cares = if rest.is_empty() {
            ""
        } else {
            let rest = rest
                .strip_prefix('+')
                .ok_or_else(|| ParseError::TrailingInput(rest.to_owned()))?;
            let (dont_cares, rest) = take_group(rest, 'd')?;
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput(rest.to_owned()));
            }
            dont_cares
        };

        Self::new(parse_list(minterms)?, parse_list(dont_cares)?)
    }
}

impl fmt::Display for LogicFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "m({})+d({})",
            self.minterms.iter().join(","),
            self.dont_cares.iter().join(",")
        )
    }
}

/// Parses a comma-separated list of integers and inclusive `lo-hi` ranges.
///
/// Values are returned in the order they appear, ranges expanded in place. An empty string is
/// an empty list.
pub fn parse_list(list: &str) -> Result<Vec<u32>, ParseError> {
    let list = list.trim();
    if list.is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for token in list.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseError::EmptyToken(list.to_owned()));
        }
        match token.split_once('-') {
            Some((lo, hi)) => {
                if lo.trim().is_empty() || hi.trim().is_empty() || hi.contains('-') {
                    return Err(ParseError::MalformedRange(token.to_owned()));
                }
                let lo = parse_value(lo.trim())?;
                let hi = parse_value(hi.trim())?;
                if lo > hi {
                    return Err(ParseError::InvertedRange { lo, hi });
                }
                values.extend(lo..=hi);
            }
            None => values.push(parse_value(token)?),
        }
    }
    Ok(values)
}

/// Rewrites a list so that every range is spelled out, e.g. `1,4-6` becomes `1,4,5,6`.
pub fn expand_ranges(list: &str) -> Result<String, ParseError> {
    Ok(parse_list(list)?.iter().join(","))
}

fn take_group(s: &str, name: char) -> Result<(&str, &str), ParseError> {
    let malformed = || ParseError::MalformedGroup {
        expected: name,
        found: s.to_owned(),
    };
    let inner = s
        .strip_prefix(name)
        .and_then(|s| s.strip_prefix('('))
        .ok_or_else(malformed)?;
    let close = inner.find(')').ok_or_else(malformed)?;
    Ok((&inner[..close], &inner[close + 1..]))
}

fn parse_value(token: &str) -> Result<u32, ParseError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::NonNumeric(token.to_owned()));
    }
    let too_many = || ParseError::TooManyVariables {
        value: token.to_owned(),
        max: MAX_VARIABLES,
    };
    // All digits, so the only parse failure left is overflow.
    let value: u32 = token.parse().map_err(|_| too_many())?;
    if value > max_value() {
        return Err(too_many());
    }
    Ok(value)
}

#[inline]
fn max_value() -> u32 {
    (1 << MAX_VARIABLES) - 1
}
