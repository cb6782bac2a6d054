// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use bitvec::prelude::*;
use std::collections::BTreeSet;

/// Which prime implicants cover which minterms.
///
/// Row `i` belongs to `primes[i]` and column `j` to `minterms[j]` of the slices the table was
/// built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageTable {
    rows: Vec<BitVec>,
    minterm_count: usize,
}

impl CoverageTable {
    pub fn new(primes: &[Cube], minterms: &[Cube]) -> Self {
        let rows = primes
            .iter()
            .map(|prime| minterms.iter().map(|m| prime.covers(m)).collect())
            .collect();
        Self {
            rows,
            minterm_count: minterms.len(),
        }
    }

    #[inline]
    pub fn prime_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn minterm_count(&self) -> usize {
        self.minterm_count
    }

    #[inline]
    pub fn covers(&self, prime_ix: usize, minterm_ix: usize) -> bool {
        self.rows[prime_ix][minterm_ix]
    }

    /// The number of minterms covered by a prime implicant.
    #[inline]
    pub fn row_count(&self, prime_ix: usize) -> usize {
        self.rows[prime_ix].count_ones()
    }

    /// The minterms covered by a prime implicant.
    #[inline]
    pub fn row_minterms(&self, prime_ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[prime_ix].iter_ones()
    }

    /// The number of prime implicants covering a minterm.
    pub fn column_count(&self, minterm_ix: usize) -> usize {
        self.rows.iter().filter(|row| row[minterm_ix]).count()
    }

    /// The prime implicants covering a minterm.
    pub fn column_primes(&self, minterm_ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(move |(prime_ix, row)| row[minterm_ix].then(|| prime_ix))
    }

    /// Rows that are the only coverer of at least one column.
    pub fn essential_rows(&self) -> BTreeSet<usize> {
        (0..self.minterm_count)
            .filter_map(|minterm_ix| {
                let mut coverers = self.column_primes(minterm_ix);
                match (coverers.next(), coverers.next()) {
                    (Some(prime_ix), None) => Some(prime_ix),
                    _ => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubes(strs: &[&str]) -> Vec<Cube> {
        strs.iter().map(|s| Cube::from_matrix(s).unwrap()).collect()
    }

    #[test]
    fn test_table() {
        let primes = cubes(&["--1", "-1-", "1--"]);
        let minterms = cubes(&["001", "010", "011", "101", "111"]);
        let table = CoverageTable::new(&primes, &minterms);

        assert_eq!(table.prime_count(), 3);
        assert_eq!(table.minterm_count(), 5);
        assert!(table.covers(0, 0));
        assert!(!table.covers(0, 1));
        assert_eq!(table.row_count(0), 4);
        assert_eq!(table.row_minterms(2).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(table.column_count(4), 3);
        assert_eq!(table.column_primes(2).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_essential_rows() {
        let primes = cubes(&["--1", "-1-", "1--"]);
        let minterms = cubes(&["001", "010", "011", "101", "111"]);
        let table = CoverageTable::new(&primes, &minterms);
        // 001 is only covered by --1 and 010 only by -1-.
        assert_eq!(table.essential_rows(), [0, 1].into_iter().collect());

        let cyclic = CoverageTable::new(
            &cubes(&["00-", "0-0", "-01", "-10", "1-1", "11-"]),
            &cubes(&["000", "001", "010", "101", "110", "111"]),
        );
        assert!(cyclic.essential_rows().is_empty());
    }
}
