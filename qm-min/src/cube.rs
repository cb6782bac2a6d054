// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    algebra::{Literal, Product},
    config::MAX_VARIABLES,
};
use arrayvec::ArrayVec;
use std::fmt;

/// A ternary vector over `{0, 1, -}`.
///
/// Position 0 is the most significant bit of the values the cube covers. `None` is a dash.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cube {
    bits: ArrayVec<Option<bool>, MAX_VARIABLES>,
}

impl Cube {
    /// Builds the cube for a single value, `width` bits wide.
    ///
    /// Panics if `width` is greater than [`MAX_VARIABLES`] or `value` doesn't fit.
    pub fn from_value(value: u32, width: usize) -> Self {
        assert!(
            width <= MAX_VARIABLES,
            "width {} must be at most {}",
            width,
            MAX_VARIABLES
        );
        assert!(
            (value as u64) < (1_u64 << width),
            "value {} does not fit in {} bits",
            value,
            width
        );
        let bits = (0..width)
            .map(|ix| Some((value >> (width - 1 - ix)) & 1 == 1))
            .collect();
        Self { bits }
    }

    /// Builds a cube from its matrix form, e.g. `"10-"`.
    ///
    /// Returns `None` if the string has characters other than `0`, `1` and `-`, or is too long.
    pub fn from_matrix(s: &str) -> Option<Self> {
        let mut bits = ArrayVec::new();
        for ch in s.chars() {
            let bit = match ch {
                '0' => Some(false),
                '1' => Some(true),
                '-' => None,
                _ => return None,
            };
            bits.try_push(bit).ok()?;
        }
        Some(Self { bits })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// The number of `1` positions, which picks the group this cube is bucketed in.
    #[inline]
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    #[inline]
    pub fn dash_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_none()).count()
    }

    /// Returns the index of the only position where `self` and `other` differ, or `None` if
    /// they differ in zero positions or in more than one.
    pub fn single_difference(&self, other: &Cube) -> Option<usize> {
        assert_eq!(
            self.width(),
            other.width(),
            "cubes compared within one run must have the same width"
        );
        let mut differing = self
            .bits
            .iter()
            .zip(&other.bits)
            .enumerate()
            .filter(|(_, (c, d))| c != d)
            .map(|(ix, _)| ix);
        match (differing.next(), differing.next()) {
            (Some(ix), None) => Some(ix),
            _ => None,
        }
    }

    /// Merges two cubes that differ in exactly one non-dash position, replacing it by a dash.
    pub fn combine(&self, other: &Cube) -> Option<Cube> {
        let ix = self.single_difference(other)?;
        if self.bits[ix].is_none() || other.bits[ix].is_none() {
            return None;
        }
        let mut bits = self.bits.clone();
        bits[ix] = None;
        Some(Self { bits })
    }

    /// Returns true if `minterm` matches every non-dash position of `self`.
    pub fn covers(&self, minterm: &Cube) -> bool {
        self.bits
            .iter()
            .zip(&minterm.bits)
            .all(|(c, d)| c.is_none() || c == d)
    }

    /// Returns true if `value` is one of the values this cube covers.
    pub fn covers_value(&self, value: u32) -> bool {
        let width = self.width();
        if (value as u64) >= (1_u64 << width) {
            return false;
        }
        self.bits.iter().enumerate().all(|(ix, bit)| match bit {
            Some(b) => ((value >> (width - 1 - ix)) & 1 == 1) == *b,
            None => true,
        })
    }

    /// The product term for this cube: `X` for a `1`, `X'` for a `0`, nothing for a dash.
    pub fn to_product(&self) -> Product {
        Product::new(
            self.bits
                .iter()
                .enumerate()
                .filter_map(|(ix, bit)| match bit {
                    Some(true) => Some(Literal::positive(ix)),
                    Some(false) => Some(Literal::negative(ix)),
                    None => None,
                }),
        )
    }

    #[inline]
    pub fn matrix_display(&self) -> CubeMatrixDisplay<'_> {
        CubeMatrixDisplay::new(self)
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cube")
            .field(&format_args!("{}", self.matrix_display()))
            .finish()
    }
}

pub struct CubeMatrixDisplay<'a> {
    cube: &'a Cube,
    format: MatrixDisplayFormat,
}

impl<'a> CubeMatrixDisplay<'a> {
    pub fn new(cube: &'a Cube) -> Self {
        Self {
            cube,
            format: MatrixDisplayFormat::default(),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }
}

impl<'a> fmt::Display for CubeMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &bit in self.cube.bits() {
            write!(f, "{}", self.format.char_for_bit(bit))?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub enum MatrixDisplayFormat {
    /// Display a cube as `10-`, with dashes for don't care positions.
    #[default]
    Dashes,

    /// Display a cube as `102`, with `2` for don't care positions.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for a position.
    pub fn char_for_bit(self, bit: Option<bool>) -> char {
        match bit {
            Some(true) => '1',
            Some(false) => '0',
            None => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alphabet;

    fn cube(s: &str) -> Cube {
        Cube::from_matrix(s).unwrap()
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Cube::from_value(5, 4), cube("0101"));
        assert_eq!(Cube::from_value(0, 1), cube("0"));
        assert_eq!(cube("0101").ones(), 2);
        assert_eq!(
            Cube::from_value(5, 4)
                .matrix_display()
                .with_format(MatrixDisplayFormat::Numeric)
                .to_string(),
            "0101"
        );
    }

    #[test]
    fn test_combine() {
        assert_eq!(cube("0101").combine(&cube("0111")), Some(cube("01-1")));
        assert_eq!(cube("01-1").combine(&cube("11-1")), Some(cube("-1-1")));
        assert_eq!(cube("0101").combine(&cube("0110")), None, "two positions");
        assert_eq!(cube("0101").combine(&cube("0101")), None, "identical");
        assert_eq!(cube("-01").combine(&cube("001")), None, "dash mismatch");
        assert_eq!(
            cube("-0").matrix_display().with_format(MatrixDisplayFormat::Numeric).to_string(),
            "20"
        );
    }

    #[test]
    fn test_covers() {
        let implicant = cube("1-0");
        assert!(implicant.covers(&cube("100")));
        assert!(implicant.covers(&cube("110")));
        assert!(!implicant.covers(&cube("111")));

        let covered: Vec<u32> = (0..8).filter(|&v| implicant.covers_value(v)).collect();
        assert_eq!(covered, vec![4, 6]);
        assert!(!implicant.covers_value(12), "out of range");
    }

    #[test]
    fn test_to_product() {
        let alphabet = Alphabet::default();
        assert_eq!(cube("1-0").to_product().display(&alphabet).to_string(), "AC'");
        assert_eq!(cube("--").to_product().display(&alphabet).to_string(), "1");
        assert_eq!(cube("0").to_product().display(&alphabet).to_string(), "A'");
    }
}
