// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{petrick, CoverageTable},
    cube::Cube,
};
use log::{debug, trace};

/// The result of selecting prime implicants to cover a set of minterms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverSelection {
    /// Essential primes, found on the full table and on the reduced table, in discovery order.
    pub essentials: Vec<Cube>,
    /// Minterms the essentials left uncovered, handed to Petrick's method.
    pub uncovered: Vec<Cube>,
    /// Minimum-cost alternatives covering `uncovered`. Empty if `uncovered` is empty.
    pub close_cover: Vec<Vec<Cube>>,
}

impl CoverSelection {
    /// Selects primes covering every minterm.
    pub fn select(mut primes: Vec<Cube>, minterms: &[Cube]) -> Self {
        let mut selection = Self::default();
        let mut remaining = minterms.to_vec();

        let table = CoverageTable::new(&primes, &remaining);
        let essentials = essential_primes(&table, &primes);
        selection.extract(&essentials, &mut primes, &mut remaining);

        if remaining.is_empty() {
            return selection;
        }

        let table = CoverageTable::new(&primes, &remaining);
        let pruned_primes = row_pass(&table, &primes);
        let pruned_minterms = column_pass(&table, &remaining);
        debug!(
            "reduced table: {} -> {} primes, {} -> {} minterms",
            primes.len(),
            pruned_primes.len(),
            remaining.len(),
            pruned_minterms.len()
        );

        if !pruned_primes.is_empty() && !pruned_minterms.is_empty() {
            primes = pruned_primes;
            remaining = pruned_minterms;
            let table = CoverageTable::new(&primes, &remaining);
            let essentials = essential_primes(&table, &primes);
            selection.extract(&essentials, &mut primes, &mut remaining);
        }

        if !remaining.is_empty() {
            selection.close_cover = petrick::close_cover(&primes, &remaining);
            selection.uncovered = remaining;
        }
        selection
    }

    /// Moves `essentials` into the selection, dropping them from `primes` and dropping the
    /// minterms they cover from `remaining`.
    fn extract(
        &mut self,
        essentials: &[Cube],
        primes: &mut Vec<Cube>,
        remaining: &mut Vec<Cube>,
    ) {
        remaining.retain(|m| !essentials.iter().any(|e| e.covers(m)));
        primes.retain(|p| !essentials.contains(p));
        for essential in essentials {
            if !self.essentials.contains(essential) {
                self.essentials.push(essential.clone());
            }
        }
        debug!(
            "{} essential primes, {} minterms left",
            self.essentials.len(),
            remaining.len()
        );
    }
}

/// Primes that are the only coverer of some minterm of `table`.
pub fn essential_primes(table: &CoverageTable, primes: &[Cube]) -> Vec<Cube> {
    table
        .essential_rows()
        .into_iter()
        .map(|ix| primes[ix].clone())
        .collect()
}

/// Drops primes covering exactly one minterm of the table, as long as another prime still in
/// play covers that minterm too.
pub fn row_pass(table: &CoverageTable, primes: &[Cube]) -> Vec<Cube> {
    let mut kept = vec![true; primes.len()];
    for prime_ix in 0..primes.len() {
        if table.row_count(prime_ix) != 1 {
            continue;
        }
        let minterm_ix = match table.row_minterms(prime_ix).next() {
            Some(ix) => ix,
            None => continue,
        };
        let covered_elsewhere = table
            .column_primes(minterm_ix)
            .any(|other| other != prime_ix && kept[other]);
        if covered_elsewhere {
            trace!("row pass drops {}", primes[prime_ix].matrix_display());
            kept[prime_ix] = false;
        }
    }

    primes
        .iter()
        .zip(kept)
        .filter_map(|(prime, keep)| keep.then(|| prime.clone()))
        .collect()
}

/// Drops minterms covered by every prime of the table.
pub fn column_pass(table: &CoverageTable, minterms: &[Cube]) -> Vec<Cube> {
    minterms
        .iter()
        .enumerate()
        .filter(|(minterm_ix, minterm)| {
            let always_covered = table.column_count(*minterm_ix) == table.prime_count();
            if always_covered {
                trace!("column pass drops {}", minterm.matrix_display());
            }
            !always_covered
        })
        .map(|(_, minterm)| minterm.clone())
        .collect()
}
