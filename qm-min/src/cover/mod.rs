// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod petrick;
mod reduce;
mod table;

pub use reduce::*;
pub use table::*;
