// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    algebra::Product,
    config::{Alphabet, MinimizerConfig},
    cover::CoverSelection,
    cube::Cube,
    display::{EquationDisplay, MinimizationDisplay, ReportDisplay},
    errors::{MinimizeError, Result},
    logic_function::LogicFunction,
    primes::prime_implicants,
};
use itertools::Itertools;
use log::debug;
use std::{collections::BTreeSet, fmt};

/// The two-level form of a minimized expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    /// Sum of products, minimized over the minterms.
    Sop,
    /// Product of sums, minimized over the maxterms and complemented.
    Pos,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sop => write!(f, "SOP"),
            Self::Pos => write!(f, "POS"),
        }
    }
}

/// Minimizes functions with a fixed configuration.
///
/// Every call builds its own working state, so one minimizer can serve any number of calls.
#[derive(Clone, Debug, Default)]
pub struct Minimizer {
    config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Parses `expr` and minimizes it in both forms.
    pub fn run(&self, expr: &str) -> Result<Report> {
        let function: LogicFunction = expr.parse()?;
        let sop = self.minimize(&function, Form::Sop)?;
        let pos = self.minimize(&function, Form::Pos)?;
        Ok(Report { function, sop, pos })
    }

    /// Minimizes `function` in the given form.
    pub fn minimize(&self, function: &LogicFunction, form: Form) -> Result<Minimization> {
        let alphabet = &self.config.alphabet;
        let width = function.variable_count();
        if width > alphabet.len() {
            return Err(MinimizeError::AlphabetTooSmall {
                needed: width,
                available: alphabet.len(),
            });
        }

        // The POS pass covers every non-minterm, don't-cares included, with no don't-cares of
        // its own.
        let (targets, values) = match form {
            Form::Sop => {
                let values: BTreeSet<u32> = function
                    .minterms()
                    .union(function.dont_cares())
                    .copied()
                    .collect();
                (function.minterms().clone(), values)
            }
            Form::Pos => {
                let maxterms = function.maxterms();
                (maxterms.clone(), maxterms)
            }
        };
        debug!(
            "{} pass: {} targets, {} values, {} variables",
            form,
            targets.len(),
            values.len(),
            width
        );

        let mut minimization = Minimization {
            form,
            variable_count: width,
            alphabet: alphabet.clone(),
            solution: Vec::new(),
            close_cover: Vec::new(),
        };
        if targets.is_empty() {
            debug!("{} pass: nothing to cover", form);
            return Ok(minimization);
        }

        let primes = prime_implicants(values, width);
        let minterms: Vec<Cube> = targets
            .iter()
            .map(|&value| Cube::from_value(value, width))
            .collect();
        let selection = CoverSelection::select(primes, &minterms);

        // Terms and alternatives are emitted in alphabet order, not in cube order.
        minimization.solution = selection
            .essentials
            .iter()
            .map(Cube::to_product)
            .sorted()
            .collect();
        minimization.close_cover = selection
            .close_cover
            .iter()
            .map(|alternative| {
                alternative
                    .iter()
                    .map(Cube::to_product)
                    .sorted()
                    .collect::<Vec<Product>>()
            })
            .sorted()
            .collect();
        Ok(minimization)
    }
}

/// The minimal expressions found for one form of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimization {
    form: Form,
    variable_count: usize,
    alphabet: Alphabet,
    solution: Vec<Product>,
    close_cover: Vec<Vec<Product>>,
}

impl Minimization {
    #[inline]
    pub fn form(&self) -> Form {
        self.form
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Terms from essential prime implicants. Part of every alternative.
    ///
    /// For [`Form::Pos`] these are the products over the maxterms; each one is displayed as a
    /// sum of its complemented literals.
    #[inline]
    pub fn solution(&self) -> &[Product] {
        &self.solution
    }

    /// Minimum-cost completions of [`Self::solution`]. Each entry, added to the solution,
    /// gives one alternative expression.
    #[inline]
    pub fn close_cover(&self) -> &[Vec<Product>] {
        &self.close_cover
    }

    /// Returns false if there was nothing to cover.
    #[inline]
    pub fn has_solution(&self) -> bool {
        !self.solution.is_empty() || !self.close_cover.is_empty()
    }

    /// Every alternative expression: the solution plus one close-cover entry each.
    pub fn equations(&self) -> Vec<Vec<Product>> {
        if self.close_cover.is_empty() {
            if self.solution.is_empty() {
                return Vec::new();
            }
            return vec![self.solution.clone()];
        }
        self.close_cover
            .iter()
            .map(|alternative| {
                self.solution
                    .iter()
                    .chain(alternative)
                    .cloned()
                    .collect()
            })
            .collect()
    }

    /// The literal count of each alternative. All alternatives cost the same.
    pub fn cost(&self) -> Option<usize> {
        self.equations()
            .first()
            .map(|equation| equation.iter().map(Product::len).sum())
    }

    /// Literal strings of the solution terms, as this form displays them.
    pub fn solution_terms(&self) -> Vec<String> {
        self.solution.iter().map(|term| self.term_string(term)).collect()
    }

    /// Literal strings of every close-cover entry, as this form displays them.
    pub fn close_cover_terms(&self) -> Vec<Vec<String>> {
        self.close_cover
            .iter()
            .map(|alternative| alternative.iter().map(|term| self.term_string(term)).collect())
            .collect()
    }

    /// Evaluates one equation at `point`.
    pub fn evaluate_equation(&self, equation: &[Product], point: u32) -> bool {
        let any_product = equation
            .iter()
            .any(|term| term.evaluate(point, self.variable_count));
        match self.form {
            Form::Sop => any_product,
            // Each clause is the complement of a maxterm product.
            Form::Pos => !any_product,
        }
    }

    /// Evaluates the first alternative at `point`, or `None` if there is no solution.
    pub fn evaluate(&self, point: u32) -> Option<bool> {
        self.equations()
            .first()
            .map(|equation| self.evaluate_equation(equation, point))
    }

    #[inline]
    pub fn display(&self) -> MinimizationDisplay<'_> {
        MinimizationDisplay::new(self)
    }

    #[inline]
    pub fn equation_display<'a>(&'a self, equation: &'a [Product]) -> EquationDisplay<'a> {
        EquationDisplay::new(equation, self.form, &self.alphabet)
    }

    fn term_string(&self, term: &Product) -> String {
        match self.form {
            Form::Sop => term.display(&self.alphabet).to_string(),
            Form::Pos => term.complement_literals().display(&self.alphabet).to_string(),
        }
    }
}

/// Both forms of a parsed function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub function: LogicFunction,
    pub sop: Minimization,
    pub pos: Minimization,
}

impl Report {
    #[inline]
    pub fn get(&self, form: Form) -> &Minimization {
        match form {
            Form::Sop => &self.sop,
            Form::Pos => &self.pos,
        }
    }

    #[inline]
    pub fn display(&self) -> ReportDisplay<'_> {
        ReportDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn strings(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constant_true() {
        let report = Minimizer::default().run("m(0,1,2,3)").unwrap();
        assert_eq!(report.sop.variable_count(), 2);
        assert_eq!(report.sop.solution(), &[Product::default()]);
        assert!(report.sop.close_cover().is_empty());
        assert_eq!(report.sop.cost(), Some(0));
        assert_eq!(report.sop.evaluate(2), Some(true));

        assert!(!report.pos.has_solution(), "no maxterms to cover");
        assert_eq!(report.pos.evaluate(0), None);
    }

    #[test]
    fn test_single_zero_minterm() {
        let report = Minimizer::default().run("m(0)").unwrap();
        assert_eq!(report.sop.variable_count(), 1);
        assert_eq!(report.sop.solution_terms(), strings(&["A'"]));
        assert_eq!(report.pos.solution_terms(), strings(&["A'"]));
        assert_eq!(report.pos.evaluate(0), Some(true));
        assert_eq!(report.pos.evaluate(1), Some(false));
    }

    #[test]
    fn test_dont_cares() {
        let report = Minimizer::default().run("m(1,2,3,5,7)+d(4,6)").unwrap();
        assert_eq!(report.sop.variable_count(), 3);
        assert_eq!(report.sop.solution_terms(), strings(&["B", "C"]));
        assert!(report.sop.close_cover().is_empty());
        assert_eq!(report.sop.cost(), Some(2));

        // The POS pass treats 4 and 6 as maxterms.
        assert_eq!(report.pos.solution_terms(), strings(&["A'C", "BC"]));
        assert_eq!(report.pos.evaluate(6), Some(false));
        assert_eq!(report.sop.evaluate(6), Some(true));
    }

    #[test]
    fn test_cyclic() {
        let report = Minimizer::default().run("m(0,1,2,5,6,7)").unwrap();
        let sop = &report.sop;
        assert!(sop.solution().is_empty());
        assert_eq!(sop.close_cover().len(), 2);
        assert_eq!(sop.cost(), Some(6));
        assert_eq!(sop.equations().len(), 2);

        // Terms within an alternative, and the alternatives themselves, are in alphabet order.
        assert_eq!(
            sop.close_cover_terms(),
            vec![
                strings(&["AB", "A'C'", "B'C"]),
                strings(&["AC", "A'B'", "BC'"])
            ]
        );
    }

    #[test]
    fn test_terms_in_alphabet_order() {
        // Every maxterm product is a single complemented variable.
        let report = Minimizer::default().run("m(15)").unwrap();
        assert_eq!(report.pos.display().to_string(), "(A)(B)(C)(D)");
        assert_eq!(report.sop.display().to_string(), "ABCD");

        let report = Minimizer::default().run("m(0,1,2,5,6,7)").unwrap();
        assert_eq!(
            report.sop.display().to_string(),
            "AB + A'C' + B'C\n    OR\nAC + A'B' + BC'"
        );
    }

    #[test]
    fn test_no_minterms() {
        let report = Minimizer::default().run("m()+d(1)").unwrap();
        assert!(!report.sop.has_solution());
        assert!(report.sop.equations().is_empty());
        assert_eq!(report.pos.solution(), &[Product::default()], "constant 0");
        assert_eq!(report.pos.evaluate(0), Some(false));
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new("xyz".chars()).unwrap();
        let minimizer = Minimizer::new(MinimizerConfig::default().with_alphabet(alphabet));
        let report = minimizer.run("m(4,5,6,7)").unwrap();
        assert_eq!(report.sop.solution_terms(), strings(&["x"]));

        assert_eq!(
            minimizer.run("m(8)"),
            Err(MinimizeError::AlphabetTooSmall {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            Minimizer::default().run("m(1,2-)+d()"),
            Err(MinimizeError::Parse(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn domain(function: &LogicFunction) -> std::ops::Range<u32> {
        0..1 << function.variable_count()
    }

    proptest! {
        #[test]
        fn proptest_sop_is_a_cover(function: LogicFunction) {
            let sop = Minimizer::default().minimize(&function, Form::Sop).unwrap();
            prop_assert_eq!(sop.has_solution(), !function.minterms().is_empty());

            for equation in sop.equations() {
                for point in domain(&function) {
                    let value = sop.evaluate_equation(&equation, point);
                    if function.minterms().contains(&point) {
                        prop_assert!(value, "minterm {} is covered", point);
                    } else if !function.is_dont_care(point) {
                        prop_assert!(!value, "off-set point {} is not covered", point);
                    }
                }
            }
        }

        #[test]
        fn proptest_complement_law(function: LogicFunction) {
            let report = Minimizer::default().run(&function.to_string()).unwrap();
            for point in domain(&function).filter(|&p| !function.is_dont_care(p)) {
                // A missing form stands for a constant: no minterms means 0, no maxterms 1.
                let sop = report.sop.evaluate(point).unwrap_or(false);
                let pos = report.pos.evaluate(point).unwrap_or(true);
                prop_assert_eq!(sop, pos, "SOP and POS agree at {}", point);
            }
        }

        #[test]
        fn proptest_literals_are_well_formed(function: LogicFunction) {
            let report = Minimizer::default().run(&function.to_string()).unwrap();
            for minimization in [&report.sop, &report.pos] {
                for equation in minimization.equations() {
                    for term in equation {
                        for lit in term.literals() {
                            prop_assert!(lit.var < function.variable_count());
                            prop_assert!(!term.literals().contains(&!*lit), "no X and X'");
                        }
                    }
                }
            }
        }

        #[test]
        fn proptest_idempotent(function: LogicFunction) {
            let minimizer = Minimizer::default();
            let first = minimizer.minimize(&function, Form::Sop).unwrap();
            let second = minimizer.minimize(&function, Form::Sop).unwrap();
            prop_assert_eq!(first.solution(), second.solution());
            prop_assert_eq!(first.cost(), second.cost());
        }
    }
}
