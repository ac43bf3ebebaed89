// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    Framework, Location, Summary, Test,
    errors::{ReadResultsError, WriteResultsError},
};
use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The schema URL written to, and expected in, the `$schema` field of serialized results.
pub const SCHEMA_V1: &str =
    "https://raw.githubusercontent.com/rwx-research/test-results-schema/main/v1.json";

/// The canonical results of one test framework.
///
/// Produced by a parser for a single results file, then combined with results from other shards
/// and other attempts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResults {
    /// The schema version marker.
    #[serde(rename = "$schema", default = "default_schema")]
    pub schema: String,

    /// The framework that produced these results.
    pub framework: Framework,

    /// Aggregate counts over `tests` and `other_errors`.
    #[serde(default)]
    pub summary: Summary,

    /// The tests.
    #[serde(default)]
    pub tests: Vec<Test>,

    /// Errors that are not attributable to any one test.
    #[serde(default)]
    pub other_errors: Vec<OtherError>,

    /// The files these results were derived from.
    #[serde(default)]
    pub derived_from: Vec<DerivedFrom>,

    /// Top-level fields this crate does not know about, preserved on round trips.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

fn default_schema() -> String {
    SCHEMA_V1.to_owned()
}

impl TestResults {
    /// Creates a new `TestResults`, computing the summary from the tests and other errors.
    pub fn new(
        framework: Framework,
        tests: Vec<Test>,
        other_errors: Vec<OtherError>,
        derived_from: Vec<DerivedFrom>,
    ) -> Self {
        let summary = Summary::compute(&tests, &other_errors);
        Self {
            schema: default_schema(),
            framework,
            summary,
            tests,
            other_errors,
            derived_from,
            extra: IndexMap::new(),
        }
    }

    /// Creates a new `TestResults` with no tests.
    pub fn empty(framework: Framework) -> Self {
        Self::new(framework, vec![], vec![], vec![])
    }

    /// Adds a test. The summary is not updated until [`Self::recompute_summary`] is called.
    pub fn add_test(&mut self, test: Test) -> &mut Self {
        self.tests.push(test);
        self
    }

    /// Adds an error that is not attributable to any one test. The summary is not updated until
    /// [`Self::recompute_summary`] is called.
    pub fn add_other_error(&mut self, other_error: OtherError) -> &mut Self {
        self.other_errors.push(other_error);
        self
    }

    /// Recomputes the summary after `tests` or `other_errors` changed.
    pub fn recompute_summary(&mut self) -> &mut Self {
        self.summary = Summary::compute(&self.tests, &self.other_errors);
        self
    }

    /// Reads results from a JSON string.
    ///
    /// Fails if the JSON does not match the schema, or if `$schema` names a different schema.
    pub fn from_json_str(json: &str) -> Result<Self, ReadResultsError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        let results: Self = serde_path_to_error::deserialize(deserializer)
            .map_err(ReadResultsError::from_path_error)?;
        if results.schema != SCHEMA_V1 {
            return Err(ReadResultsError::UnsupportedSchema {
                found: results.schema,
                expected: SCHEMA_V1,
            });
        }
        Ok(results)
    }

    /// Writes these results as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, WriteResultsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Provenance for a set of results: the file they were parsed from.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFrom {
    /// The path of the original results file.
    pub original_file_path: Utf8PathBuf,

    /// The parse group the file belonged to, used to tell shards apart.
    #[serde(default)]
    pub group_number: u32,
}

impl DerivedFrom {
    /// Creates a new `DerivedFrom`.
    pub fn new(original_file_path: impl Into<Utf8PathBuf>, group_number: u32) -> Self {
        Self {
            original_file_path: original_file_path.into(),
            group_number,
        }
    }
}

/// A failure that is not attributable to a specific test, e.g. a crash during suite setup.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherError {
    /// The error message.
    pub message: String,

    /// The name of the exception or error type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    /// The backtrace, one frame per entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backtrace: Option<Vec<String>>,

    /// Where the error occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Framework-specific metadata.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, serde_json::Value>,
}

impl OtherError {
    /// Creates a new `OtherError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exception: None,
            backtrace: None,
            location: None,
            meta: IndexMap::new(),
        }
    }

    /// Sets the exception.
    pub fn set_exception(&mut self, exception: impl Into<String>) -> &mut Self {
        self.exception = Some(exception.into());
        self
    }

    /// Sets the backtrace.
    pub fn set_backtrace(
        &mut self,
        backtrace: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.backtrace = Some(backtrace.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the location.
    pub fn set_location(&mut self, location: Location) -> &mut Self {
        self.location = Some(location);
        self
    }
}
