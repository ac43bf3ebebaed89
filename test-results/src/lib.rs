// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! The canonical data model for CI test results.
//!
//! Every test runner output (JUnit XML, RSpec JSON, Jest JSON, ...) is normalized by its parser
//! into a [`TestResults`] value: one report per [`Framework`], listing each [`Test`] with its
//! current [`TestAttempt`] and any superseded past attempts.
//!
//! This crate also provides the [`Summary`] calculation used whenever a set of tests changes, and
//! JSON reading and writing for the versioned results schema.

pub mod errors;
mod framework;
#[cfg(feature = "proptest1")]
pub mod proptest_helpers;
mod results;
mod status;
mod summary;

pub use framework::*;
pub use results::*;
pub use status::*;
pub use summary::*;
pub use test::*;
