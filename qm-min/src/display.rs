// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    algebra::Product,
    config::Alphabet,
    minimize::{Form, Minimization, Report},
};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Printed when a form has nothing to cover.
pub const NO_SOLUTION: &str = "There is no solution for the provided function.";

/// Displays one alternative: `A'B + C` for SOP, `(A + B')(C)` for POS.
pub struct EquationDisplay<'a> {
    equation: &'a [Product],
    form: Form,
    alphabet: &'a Alphabet,
    separator: Cow<'a, str>,
}

impl<'a> EquationDisplay<'a> {
    pub fn new(equation: &'a [Product], form: Form, alphabet: &'a Alphabet) -> Self {
        Self {
            equation,
            form,
            alphabet,
            separator: Cow::Borrowed(" + "),
        }
    }

    /// Sets the text between the terms of a sum.
    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    fn fmt_clause(&self, f: &mut fmt::Formatter, term: &Product) -> fmt::Result {
        // De Morgan: the maxterm product XY' becomes the clause (X' + Y).
        if term.is_empty() {
            return write!(f, "0");
        }
        write!(f, "(")?;
        for lit in term.literals().iter().with_position() {
            match lit {
                Position::First(lit) | Position::Middle(lit) => {
                    write!(f, "{}{}", (!*lit).display(self.alphabet), self.separator)?;
                }
                Position::Last(lit) | Position::Only(lit) => {
                    write!(f, "{}", (!*lit).display(self.alphabet))?;
                }
            }
        }
        write!(f, ")")
    }
}

impl<'a> fmt::Display for EquationDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.form {
            Form::Sop => {
                if self.equation.is_empty() {
                    return write!(f, "0");
                }
                for term in self.equation.iter().with_position() {
                    match term {
                        Position::First(term) | Position::Middle(term) => {
                            write!(f, "{}{}", term.display(self.alphabet), self.separator)?;
                        }
                        Position::Last(term) | Position::Only(term) => {
                            write!(f, "{}", term.display(self.alphabet))?;
                        }
                    }
                }
                Ok(())
            }
            Form::Pos => {
                if self.equation.is_empty() {
                    return write!(f, "1");
                }
                for term in self.equation {
                    self.fmt_clause(f, term)?;
                }
                Ok(())
            }
        }
    }
}

/// Displays every alternative of a [`Minimization`], one per line.
pub struct MinimizationDisplay<'a> {
    minimization: &'a Minimization,
    alternative_separator: Cow<'a, str>,
}

impl<'a> MinimizationDisplay<'a> {
    pub fn new(minimization: &'a Minimization) -> Self {
        Self {
            minimization,
            alternative_separator: Cow::Borrowed("\n    OR\n"),
        }
    }

    pub fn with_alternative_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.alternative_separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for MinimizationDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let equations = self.minimization.equations();
        if equations.is_empty() {
            return write!(f, "{}", NO_SOLUTION);
        }
        for (ix, equation) in equations.iter().enumerate() {
            if ix > 0 {
                write!(f, "{}", self.alternative_separator)?;
            }
            write!(f, "{}", self.minimization.equation_display(equation))?;
        }
        Ok(())
    }
}

/// Displays both forms of a [`Report`].
///
/// The header echoes the function in its normalized `m(..)+d(..)` form, not the text that was
/// parsed, so equivalent inputs print the same header.
pub struct ReportDisplay<'a> {
    report: &'a Report,
    forms: Cow<'a, [Form]>,
}

impl<'a> ReportDisplay<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            report,
            forms: Cow::Borrowed(&[Form::Sop, Form::Pos]),
        }
    }

    /// Restricts the output to the given forms, in that order.
    pub fn with_forms(mut self, forms: impl Into<Cow<'a, [Form]>>) -> Self {
        self.forms = forms.into();
        self
    }
}

impl<'a> fmt::Display for ReportDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Solution for: {}", self.report.function)?;
        for &form in self.forms.iter() {
            writeln!(f, "{} form:", form)?;
            writeln!(f, "{}", self.report.get(form).display())?;
        }
        Ok(())
    }
}
