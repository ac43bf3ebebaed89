// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for merging test results.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! [annotations]
//! annotate-new-tests = true
//! namespace = "__rwx"
//! ```
//!
//! All keys are optional, and the defaults match the behavior expected by downstream consumers
//! of merged results.

use crate::errors::MergeConfigError;
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// The default meta namespace that annotations are written under.
pub const DEFAULT_ANNOTATION_NAMESPACE: &str = "__rwx";

/// The annotation key set on tests that first appear in a retry attempt.
pub const MISSING_IN_PREVIOUS_BATCH_KEY: &str = "missingInPreviousBatchOfResults";

/// Configuration for a [`Merger`](crate::Merger).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct MergeConfig {
    /// Annotations written into test metadata while reconciling.
    #[serde(default)]
    pub annotations: AnnotationConfig,
}

impl MergeConfig {
    /// Parses configuration from a TOML string.
    ///
    /// Unknown keys are not an error: they are logged and returned alongside the configuration.
    pub fn from_toml_str(contents: &str) -> Result<(Self, BTreeSet<String>), MergeConfigError> {
        let (config, unknown) =
            Self::deserialize_toml(contents).map_err(MergeConfigError::Parse)?;
        for key in &unknown {
            warn!("merge config: ignoring unknown key `{key}`");
        }
        config.validate()?;

        debug!(?config, "merge config: loaded");
        Ok((config, unknown))
    }

    fn deserialize_toml(contents: &str) -> Result<(Self, BTreeSet<String>), toml::de::Error> {
        let deserializer = toml::Deserializer::parse(contents)?;
        let mut unknown = BTreeSet::new();
        let config: MergeConfig = serde_ignored::deserialize(deserializer, |path| {
            unknown.insert(path.to_string());
        })?;
        Ok((config, unknown))
    }

    fn validate(&self) -> Result<(), MergeConfigError> {
        if self.annotations.namespace.is_empty() {
            return Err(MergeConfigError::EmptyNamespace);
        }
        Ok(())
    }
}

/// Controls the annotations written into `meta` of reconciled test attempts.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct AnnotationConfig {
    /// Whether tests first seen in a retry attempt are tagged with
    /// [`MISSING_IN_PREVIOUS_BATCH_KEY`].
    #[serde(default = "default_annotate_new_tests")]
    pub annotate_new_tests: bool,

    /// The top-level `meta` key that annotations are written under.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            annotate_new_tests: default_annotate_new_tests(),
            namespace: default_namespace(),
        }
    }
}

fn default_annotate_new_tests() -> bool {
    true
}

fn default_namespace() -> String {
    DEFAULT_ANNOTATION_NAMESPACE.to_owned()
}
