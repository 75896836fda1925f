// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how related items get their numbers and their order.
//!
//! Scores are bounded to `[0, 1]` and the ranking comparator is a total order,
//! so ranking is fully deterministic.

mod core;
pub mod ranking;

pub use self::core::*;
