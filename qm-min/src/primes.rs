// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use log::{debug, trace};
use std::collections::BTreeSet;

/// Cubes bucketed by order (number of dashes) and group (number of ones).
///
/// `buckets[order][group]` holds the cubes of that order whose `1` count is `group`.
#[derive(Clone, Debug)]
pub struct CubeTable {
    width: usize,
    buckets: Vec<Vec<BTreeSet<Cube>>>,
    checked: BTreeSet<Cube>,
}

impl CubeTable {
    /// Buckets the values at order 0. Every value must fit in `width` bits.
    pub fn new(values: impl IntoIterator<Item = u32>, width: usize) -> Self {
        let mut buckets = vec![vec![BTreeSet::new(); width + 1]; width + 1];
        for value in values {
            let cube = Cube::from_value(value, width);
            buckets[0][cube.ones()].insert(cube);
        }
        Self {
            width,
            buckets,
            checked: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn bucket(&self, order: usize, group: usize) -> &BTreeSet<Cube> {
        &self.buckets[order][group]
    }

    #[inline]
    pub fn is_checked(&self, cube: &Cube) -> bool {
        self.checked.contains(cube)
    }

    /// Runs all `width` combination rounds.
    pub fn combine_all(&mut self) {
        for order in 0..self.width {
            let merged = self.combine_round(order);
            debug!("combination round {}: {} new cubes", order, merged);
        }
    }

    /// Merges every pair from adjacent groups at `order` into `order + 1`. Returns the number
    /// of distinct cubes produced.
    fn combine_round(&mut self, order: usize) -> usize {
        let mut produced = 0;
        for group in 0..self.width {
            let mut next = BTreeSet::new();
            for x in &self.buckets[order][group] {
                for y in &self.buckets[order][group + 1] {
                    if let Some(merged) = x.combine(y) {
                        debug_assert_eq!(merged.dash_count(), order + 1);
                        trace!(
                            "{} + {} -> {}",
                            x.matrix_display(),
                            y.matrix_display(),
                            merged.matrix_display()
                        );
                        next.insert(merged);
                        self.checked.insert(x.clone());
                        self.checked.insert(y.clone());
                    }
                }
            }
            produced += next.len();
            self.buckets[order + 1][group].extend(next);
        }
        produced
    }

    /// Every cube in the table that was never merged, in cube order.
    pub fn prime_implicants(&self) -> Vec<Cube> {
        let primes: BTreeSet<&Cube> = self
            .buckets
            .iter()
            .flatten()
            .flatten()
            .filter(|cube| !self.checked.contains(*cube))
            .collect();
        primes.into_iter().cloned().collect()
    }
}

/// Computes the prime implicants of the function whose on-set and don't-care set together
/// make up `values`.
pub fn prime_implicants(values: impl IntoIterator<Item = u32>, width: usize) -> Vec<Cube> {
    let mut table = CubeTable::new(values, width);
    table.combine_all();
    let primes = table.prime_implicants();
    debug!(
        "prime implicants: [{}]",
        primes
            .iter()
            .map(|p| p.matrix_display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    primes
}
