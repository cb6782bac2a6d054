// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-level minimization of single-output boolean functions with the Quine-McCluskey method
//! and Petrick's method.
//!
//! ```
//! use qm_min::minimize::Minimizer;
//!
//! let report = Minimizer::default().run("m(1,2,3,5,7)+d(4,6)").unwrap();
//! assert_eq!(report.sop.display().to_string(), "B + C");
//! assert_eq!(report.pos.display().to_string(), "(A' + C)(B + C)");
//! ```

pub mod algebra;
pub mod batch;
pub mod config;
pub mod cover;
pub mod cube;
pub mod display;
pub mod errors;
pub mod logic_function;
pub mod minimize;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
