// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while reading and writing test results.

use thiserror::Error;

/// An error that occurs while reading a [`TestResults`](crate::TestResults) from JSON.
///
/// Returned by [`TestResults::from_json_str`](crate::TestResults::from_json_str).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadResultsError {
    /// The input was not valid JSON, or did not match the results schema.
    #[error("error deserializing test results at `{path}`")]
    Deserialize {
        /// The JSON path at which deserialization failed.
        path: String,

        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },

    /// The `$schema` marker names a schema this crate does not understand.
    #[error("unsupported test results schema `{found}` (expected `{expected}`)")]
    UnsupportedSchema {
        /// The schema URL that was found.
        found: String,

        /// The schema URL this crate reads and writes.
        expected: &'static str,
    },
}

impl ReadResultsError {
    pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self::Deserialize {
            path,
            error: err.into_inner(),
        }
    }
}

/// An error that occurs while writing a [`TestResults`](crate::TestResults) as JSON.
#[derive(Debug, Error)]
#[error("error serializing test results to JSON")]
pub struct WriteResultsError {
    #[from]
    inner: serde_json::Error,
}
