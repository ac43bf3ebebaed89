// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::MergeConfig, errors::MergeError, reconcile::reconcile, union::union_batch};
use std::collections::BTreeMap;
use test_results::{Framework, TestResults};
use tracing::debug;

/// Merges test results from several attempts into one report per framework.
///
/// # Examples
///
/// ```
/// use results_merge::{Merger, config::MergeConfig};
/// use test_results::{
///     Framework, FrameworkKind, FrameworkLanguage, Test, TestAttempt, TestResults, TestStatus,
/// };
///
/// let rspec = Framework::new(FrameworkLanguage::Ruby, FrameworkKind::RSpec);
/// let run = |status: TestStatus| {
///     let test = Test::new("Math adds", TestAttempt::new(status));
///     TestResults::new(rspec.clone(), vec![test], vec![], vec![])
/// };
///
/// let merger = Merger::new(MergeConfig::default());
/// let merged = merger
///     .merge(vec![vec![run(TestStatus::failed())], vec![run(TestStatus::successful())]])
///     .unwrap();
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].summary.successful, 1);
/// assert_eq!(merged[0].summary.retries, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Creates a new `Merger` with the given configuration.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this merger uses.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merges results across attempts.
    ///
    /// `attempts` is ordered oldest first. Each attempt is a list of results for any number of
    /// frameworks, including several results (e.g. shards) for the same framework.
    ///
    /// Returns one result per framework seen in any attempt, sorted by language and then kind.
    pub fn merge(&self, attempts: Vec<Vec<TestResults>>) -> Result<Vec<TestResults>, MergeError> {
        if attempts.is_empty() {
            return Err(MergeError::NoAttempts);
        }

        let attempt_count = attempts.len();
        let mut by_framework: BTreeMap<Framework, Vec<Vec<TestResults>>> = BTreeMap::new();
        for (attempt_index, attempt) in attempts.into_iter().enumerate() {
            for results in attempt {
                let batches = by_framework
                    .entry(results.framework.clone())
                    .or_insert_with(|| vec![Vec::new(); attempt_count]);
                batches[attempt_index].push(results);
            }
        }

        debug!(
            attempts = attempt_count,
            frameworks = by_framework.len(),
            "merging test results"
        );

        by_framework
            .into_iter()
            .map(|(framework, batches)| {
                let attempts = batches
                    .into_iter()
                    .map(|batch| {
                        if batch.is_empty() {
                            Ok(None)
                        } else {
                            union_batch(batch).map(Some)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                reconcile(framework, attempts, &self.config.annotations)
            })
            .collect()
    }
}

/// Merges results across attempts with the given configuration.
///
/// This is a shorthand for [`Merger::merge`].
pub fn merge_attempts(
    attempts: Vec<Vec<TestResults>>,
    config: &MergeConfig,
) -> Result<Vec<TestResults>, MergeError> {
    Merger::new(config.clone()).merge(attempts)
}
