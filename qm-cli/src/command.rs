// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::{ArgEnum, Parser};
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::{error, info, LevelFilter};
use qm_min::{
    config::{Alphabet, MinimizerConfig},
    logic_function::expand_ranges,
    minimize::{Form, Minimizer, Report},
};

#[derive(Debug, Parser)]
#[clap(about = "Minimize boolean functions with the Quine-McCluskey method")]
pub struct QmCliApp {
    /// Variable names, most significant first (default: ABCDEFGHIJ).
    #[clap(long, short, global = true)]
    alphabet: Option<String>,

    /// Which forms to print.
    #[clap(long, short, global = true, arg_enum, default_value = "both")]
    form: FormArg,

    /// More log output; repeat for trace.
    #[clap(long, short, global = true, parse(from_occurrences))]
    verbose: u64,

    /// Only log errors.
    #[clap(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[clap(subcommand)]
    command: QmCliCommand,
}

#[derive(Debug, Parser)]
pub enum QmCliCommand {
    /// Minimize one expression, e.g. "m(1,2,5-7)+d(3)".
    Minimize { expr: String },
    /// Minimize every non-blank line of a file.
    Batch { file: Utf8PathBuf },
    /// Spell out the ranges of a comma-separated list.
    Range { list: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ArgEnum)]
pub enum FormArg {
    Sop,
    Pos,
    Both,
}

impl FormArg {
    fn forms(self) -> &'static [Form] {
        match self {
            FormArg::Sop => &[Form::Sop],
            FormArg::Pos => &[Form::Pos],
            FormArg::Both => &[Form::Sop, Form::Pos],
        }
    }
}

impl QmCliApp {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn minimizer(&self) -> Result<Minimizer> {
        let mut config = MinimizerConfig::default();
        if let Some(names) = &self.alphabet {
            let alphabet = Alphabet::new(names.chars())
                .wrap_err_with(|| format!("invalid alphabet {:?}", names))?;
            config = config.with_alphabet(alphabet);
        }
        Ok(Minimizer::new(config))
    }

    pub fn exec(self) -> Result<()> {
        let minimizer = self.minimizer()?;
        let forms = self.form.forms();
        match self.command {
            QmCliCommand::Minimize { expr } => {
                let report = minimizer.run(&expr)?;
                print_report(&report, forms);
                Ok(())
            }
            QmCliCommand::Batch { file } => {
                let input = std::fs::read_to_string(&file)
                    .wrap_err_with(|| format!("failed to read {}", file))?;
                let mut total = 0;
                let mut failed = 0;
                for entry in minimizer.run_batch(&input) {
                    total += 1;
                    match entry.result {
                        Ok(report) => print_report(&report, forms),
                        Err(err) => {
                            failed += 1;
                            error!("{}:{}: {:?}: {}", file, entry.line_number, entry.expression, err);
                        }
                    }
                }
                info!("{}: {} expressions, {} failed", file, total, failed);
                if failed > 0 {
                    bail!("{} of {} expressions in {} failed", failed, total, file);
                }
                Ok(())
            }
            QmCliCommand::Range { list } => {
                println!("{}", expand_ranges(&list)?);
                Ok(())
            }
        }
    }
}

fn print_report(report: &Report, forms: &'static [Form]) {
    println!("{}", report.display().with_forms(forms));
}
