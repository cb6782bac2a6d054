// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::logic_function::LogicFunction;
use proptest::prelude::*;

/// Point kinds drawn for each value of the domain.
const OFF: u8 = 0;
const ON: u8 = 1;
const DONT_CARE: u8 = 2;

impl Arbitrary for LogicFunction {
    /// The largest variable count to generate. Defaults to 4.
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(max_variables: Self::Parameters) -> Self::Strategy {
        let max_variables = max_variables.unwrap_or(4);
        // Generate one of OFF, ON or DONT_CARE for each point of the domain.
        (1..=max_variables)
            .prop_flat_map(|width| prop::collection::vec(OFF..=DONT_CARE, 1 << width))
            .prop_map(|points| {
                let values_of = |kind: u8| {
                    points
                        .iter()
                        .enumerate()
                        .filter(move |(_, point)| **point == kind)
                        .map(|(value, _)| value as u32)
                };
                LogicFunction::new(values_of(ON), values_of(DONT_CARE))
                    .expect("generated values fit in the variable limit")
            })
            .boxed()
    }
}
