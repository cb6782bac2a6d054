// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::Result,
    minimize::{Minimizer, Report},
};
use log::debug;

/// The outcome of one line of a batch.
#[derive(Debug)]
pub struct BatchEntry<'a> {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub expression: &'a str,
    pub result: Result<Report>,
}

impl Minimizer {
    /// Runs every non-blank line of `input` as its own expression.
    ///
    /// Lines are independent: a line that fails to parse doesn't affect the others.
    pub fn run_batch<'a>(&'a self, input: &'a str) -> impl Iterator<Item = BatchEntry<'a>> + 'a {
        input
            .lines()
            .enumerate()
            .map(|(ix, line)| (ix + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(move |(line_number, expression)| {
                debug!("batch line {}: {}", line_number, expression);
                BatchEntry {
                    line_number,
                    expression,
                    result: self.run(expression),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{MinimizeError, ParseError};

    #[test]
    fn test_batch_lines_are_independent() {
        let input = "m(0)\n\nm(1,2-)+d()\n  m(0,1,2,3)  \n";
        let minimizer = Minimizer::default();
        let entries: Vec<_> = minimizer.run_batch(input).collect();

        assert_eq!(entries.len(), 3, "blank line skipped");
        assert_eq!(entries[0].line_number, 1);
        assert!(entries[0].result.is_ok());

        assert_eq!(entries[1].line_number, 3);
        assert_eq!(
            entries[1].result.as_ref().unwrap_err(),
            &MinimizeError::Parse(ParseError::MalformedRange("2-".to_owned()))
        );

        assert_eq!(entries[2].expression, "m(0,1,2,3)");
        let report = entries[2].result.as_ref().unwrap();
        assert_eq!(report.sop.cost(), Some(0));
    }
}
