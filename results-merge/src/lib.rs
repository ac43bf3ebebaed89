// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Reconciles canonical test results gathered across shards and retry attempts.
//!
//! A CI run may execute a test suite several times: an original attempt, then zero or more
//! retries, each of which may be split into parallel shards. Parsers turn every shard's output
//! into a [`TestResults`](test_results::TestResults). This crate combines them back into one
//! report per framework:
//!
//! 1. Within an attempt, shards of the same framework are concatenated ([`union_batch`]).
//! 2. Across attempts, each logical test is matched by identity and its outcomes are folded into
//!    one current attempt plus a history of past attempts ([`reconcile`]).
//!
//! The entry point for most callers is [`Merger`].

pub mod config;
pub mod errors;
mod merge;
mod reconcile;
#[cfg(test)]
mod test_helpers;
mod union;

pub use merge::*;
pub use reconcile::*;
pub use union::*;
