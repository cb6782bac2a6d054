// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Petrick's method.
//!
//! Every prime implicant is a selection variable: the product `P0 P3` selects primes 0 and 3.
//! Each minterm contributes a sum of the primes covering it, and any product in the expansion
//! of the product of those sums is a complete cover.

use crate::{cover::CoverageTable, cube::Cube};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;

/// A set of chosen primes, by index into the prime list.
///
/// Selections only ever appear uncomplemented, so the AND of two of them is their union.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selection {
    primes: BTreeSet<usize>,
}

impl Selection {
    pub fn new(primes: impl IntoIterator<Item = usize>) -> Self {
        Self {
            primes: primes.into_iter().collect(),
        }
    }

    /// The selection of a single prime.
    #[inline]
    pub fn single(prime_ix: usize) -> Self {
        Self::new([prime_ix])
    }

    /// Indexes of the chosen primes, in increasing order.
    #[inline]
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.primes.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Returns true if every prime chosen by `self` is also chosen by `other`.
    #[inline]
    pub fn is_subset(&self, other: &Selection) -> bool {
        self.primes.is_subset(&other.primes)
    }

    /// Chooses the primes of both selections.
    pub fn union(&self, other: &Selection) -> Selection {
        Self {
            primes: self.primes.union(&other.primes).copied().collect(),
        }
    }
}

/// AND of two sums of selections. An empty sum acts as the identity, so folding can start from
/// an empty accumulator.
pub fn multiply(a: &[Selection], b: &[Selection]) -> Vec<Selection> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    a.iter()
        .cartesian_product(b)
        .map(|(x, y)| x.union(y))
        .collect()
}

/// Applies the absorption law (`X + XY = X`) and removes duplicates.
pub fn absorb(sum: Vec<Selection>) -> Vec<Selection> {
    let sum: Vec<Selection> = sum.into_iter().unique().collect();
    // Subset is a partial order, so one pass removes every absorbed selection.
    sum.iter()
        .filter(|s| !sum.iter().any(|t| t != *s && t.is_subset(s)))
        .cloned()
        .collect()
}

/// Multiplies out a product of sums, absorbing after every step.
pub fn multiply_out(sums: &[Vec<Selection>]) -> Vec<Selection> {
    let mut result: Vec<Selection> = Vec::new();
    for (ix, sum) in sums.iter().enumerate() {
        result = absorb(multiply(&result, sum));
        trace!("after sum {}: {} selections", ix, result.len());
    }
    result
}

/// The per-minterm sums of covering primes, one sum per table column.
pub fn covering_sums(table: &CoverageTable) -> Vec<Vec<Selection>> {
    (0..table.minterm_count())
        .map(|minterm_ix| {
            let sum: Vec<Selection> = table
                .column_primes(minterm_ix)
                .map(Selection::single)
                .collect();
            debug_assert!(
                !sum.is_empty(),
                "minterm {} reached Petrick's method without a coverer",
                minterm_ix
            );
            sum
        })
        .collect()
}

/// Total literal count of the primes a selection picks.
pub fn selection_cost(selection: &Selection, primes: &[Cube]) -> usize {
    selection
        .primes()
        .map(|ix| primes[ix].to_product().len())
        .sum()
}

/// Finds every minimum-cost way of covering `minterms` with `primes`.
///
/// Each returned entry is one alternative, listed in prime order. Alternatives are ordered by
/// selection.
pub fn close_cover(primes: &[Cube], minterms: &[Cube]) -> Vec<Vec<Cube>> {
    let table = CoverageTable::new(primes, minterms);
    let sums = covering_sums(&table);
    let mut selections = multiply_out(&sums);
    selections.sort();
    debug!(
        "Petrick's method: {} minterms, {} candidate covers",
        minterms.len(),
        selections.len()
    );

    let min_cost = match selections
        .iter()
        .map(|s| selection_cost(s, primes))
        .min()
    {
        Some(cost) => cost,
        None => return Vec::new(),
    };

    selections
        .iter()
        .filter(|s| selection_cost(s, primes) == min_cost)
        .map(|s| s.primes().map(|ix| primes[ix].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubes(strs: &[&str]) -> Vec<Cube> {
        strs.iter().map(|s| Cube::from_matrix(s).unwrap()).collect()
    }

    fn selection(primes: &[usize]) -> Selection {
        Selection::new(primes.iter().copied())
    }

    #[test]
    fn test_multiply() {
        let p0 = Selection::single(0);
        let p1 = Selection::single(1);
        let p2 = Selection::single(2);

        assert_eq!(multiply(&[], &[p0.clone()]), vec![p0.clone()]);

        // (P0 + P1)(P0 + P2) = P0 + P0 P2 + P1 P0 + P1 P2
        let res = multiply(&[p0.clone(), p1], &[p0.clone(), p2]);
        assert_eq!(res.len(), 4);
        assert!(res.contains(&p0));
        assert!(res.contains(&selection(&[1, 2])));
    }

    #[test]
    fn test_absorb() {
        let res = absorb(vec![
            selection(&[0, 1]),
            selection(&[0]),
            selection(&[1, 2]),
            selection(&[0]),
            selection(&[0, 1, 2]),
        ]);
        assert_eq!(res, vec![selection(&[0]), selection(&[1, 2])], "P0 absorbs P0 P1");
    }

    #[test]
    fn test_multiply_out() {
        // (P0 + P1)(P0 + P2) = P0 + P1 P2
        let sums = vec![
            vec![Selection::single(0), Selection::single(1)],
            vec![Selection::single(0), Selection::single(2)],
        ];
        let mut res = multiply_out(&sums);
        res.sort();
        assert_eq!(res, vec![selection(&[0]), selection(&[1, 2])]);

        assert!(multiply_out(&[]).is_empty());
    }

    #[test]
    fn test_cyclic_close_cover() {
        // f = m(0, 1, 2, 5, 6, 7): the two irredundant covers of three primes each.
        let primes = cubes(&["00-", "0-0", "-01", "-10", "1-1", "11-"]);
        let minterms = cubes(&["000", "001", "010", "101", "110", "111"]);
        let covers = close_cover(&primes, &minterms);

        assert_eq!(covers.len(), 2);
        assert!(covers.contains(&cubes(&["00-", "-10", "1-1"])));
        assert!(covers.contains(&cubes(&["0-0", "-01", "11-"])));
    }

    #[test]
    fn test_cost_prefers_fewer_literals() {
        // 011 is covered by 0-1 (two literals) or 011 (three literals).
        let primes = cubes(&["0-1", "011"]);
        let minterms = cubes(&["011"]);
        assert_eq!(close_cover(&primes, &minterms), vec![cubes(&["0-1"])]);
        assert_eq!(selection_cost(&selection(&[0, 1]), &primes), 5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{logic_function::LogicFunction, primes::prime_implicants};
    use proptest::prelude::*;

    /// The cheapest cover over all subsets of `primes`.
    fn exhaustive_min_cost(primes: &[Cube], minterms: &[Cube]) -> usize {
        (0_u32..1 << primes.len())
            .filter_map(|mask| {
                let chosen: Vec<&Cube> = primes
                    .iter()
                    .enumerate()
                    .filter(|(ix, _)| (mask >> ix) & 1 == 1)
                    .map(|(_, prime)| prime)
                    .collect();
                let covers_all = minterms.iter().all(|m| chosen.iter().any(|p| p.covers(m)));
                covers_all.then(|| chosen.iter().map(|p| p.to_product().len()).sum())
            })
            .min()
            .expect("the full set of primes always covers")
    }

    proptest! {
        #[test]
        fn proptest_close_cover_is_minimal(function in any_with::<LogicFunction>(Some(4))) {
            prop_assume!(!function.minterms().is_empty());
            let width = function.variable_count();
            let values = function.minterms().union(function.dont_cares()).copied();
            let primes = prime_implicants(values, width);
            prop_assume!(primes.len() <= 12);

            let minterms: Vec<Cube> = function
                .minterms()
                .iter()
                .map(|&v| Cube::from_value(v, width))
                .collect();
            let alternatives = close_cover(&primes, &minterms);
            prop_assert!(!alternatives.is_empty());

            let best = exhaustive_min_cost(&primes, &minterms);
            for alternative in alternatives {
                prop_assert!(minterms.iter().all(|m| alternative.iter().any(|p| p.covers(m))));
                let cost: usize = alternative.iter().map(|p| p.to_product().len()).sum();
                prop_assert_eq!(cost, best);
            }
        }
    }
}
