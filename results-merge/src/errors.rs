// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while merging test results.

use test_results::Framework;
use thiserror::Error;

/// An error that occurs while merging test results.
///
/// These errors indicate that the caller violated a precondition, not that the results
/// themselves were malformed: results are validated when they are parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeError {
    /// No attempts were provided.
    #[error("no attempts were provided to merge")]
    NoAttempts,

    /// A batch of results to union was empty.
    #[error("cannot union an empty batch of results")]
    EmptyBatch,

    /// Results from different frameworks were passed in where a single framework was required.
    #[error("cannot combine results from different frameworks: expected {expected}, found {found}")]
    FrameworkMismatch {
        /// The framework the results were expected to have.
        expected: Framework,

        /// The framework that was found.
        found: Framework,
    },

    /// A framework was passed in for reconciliation, but no attempt had results for it.
    #[error("no attempt has results for framework {framework}")]
    FrameworkNotObserved {
        /// The framework.
        framework: Framework,
    },
}

/// An error that occurs while reading merge configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeConfigError {
    /// The configuration was not valid TOML, or did not match the expected shape.
    #[error("failed to parse merge config")]
    Parse(#[source] toml::de::Error),

    /// The annotation namespace was empty.
    #[error("annotation namespace must not be empty")]
    EmptyNamespace,
}
