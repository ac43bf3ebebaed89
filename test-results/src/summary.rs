// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{OtherError, Test, TestStatusKind};
use serde::{Deserialize, Serialize};

/// Aggregate counts over a set of tests.
///
/// Only each test's current attempt is counted; past attempts contribute to `retries` and nothing
/// else.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The overall status.
    pub status: SummaryStatus,

    /// The total number of tests.
    pub tests: usize,

    /// The number of errors not attributable to a test.
    pub other_errors: usize,

    /// The number of tests that have past attempts.
    pub retries: usize,

    /// The number of canceled tests.
    pub canceled: usize,

    /// The number of failed tests.
    pub failed: usize,

    /// The number of pending tests.
    pub pended: usize,

    /// The number of quarantined tests.
    pub quarantined: usize,

    /// The number of skipped tests.
    pub skipped: usize,

    /// The number of successful tests.
    pub successful: usize,

    /// The number of tests that timed out.
    pub timed_out: usize,

    /// The number of todo tests.
    pub todo: usize,
}

impl Summary {
    /// Computes a summary from a list of tests and other errors.
    pub fn compute(tests: &[Test], other_errors: &[OtherError]) -> Self {
        let mut summary = Self {
            other_errors: other_errors.len(),
            ..Self::default()
        };
        let mut any_failure = !other_errors.is_empty();

        for test in tests {
            summary.add_test(test);
            any_failure |= test.attempt.status.implies_failure();
        }

        if any_failure {
            summary.status = SummaryStatus::failed();
        }
        summary
    }

    /// Returns the count for the given status kind.
    pub fn count(&self, kind: TestStatusKind) -> usize {
        match kind {
            TestStatusKind::Successful => self.successful,
            TestStatusKind::Failed => self.failed,
            TestStatusKind::Canceled => self.canceled,
            TestStatusKind::TimedOut => self.timed_out,
            TestStatusKind::Skipped => self.skipped,
            TestStatusKind::Pended => self.pended,
            TestStatusKind::Todo => self.todo,
            TestStatusKind::Quarantined => self.quarantined,
        }
    }

    fn add_test(&mut self, test: &Test) {
        self.tests += 1;
        if test.is_retried() {
            self.retries += 1;
        }
        let counter = match test.attempt.status.kind {
            TestStatusKind::Successful => &mut self.successful,
            TestStatusKind::Failed => &mut self.failed,
            TestStatusKind::Canceled => &mut self.canceled,
            TestStatusKind::TimedOut => &mut self.timed_out,
            TestStatusKind::Skipped => &mut self.skipped,
            TestStatusKind::Pended => &mut self.pended,
            TestStatusKind::Todo => &mut self.todo,
            TestStatusKind::Quarantined => &mut self.quarantined,
        };
        *counter += 1;
    }
}

/// The overall status of a [`Summary`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct SummaryStatus {
    /// Whether the results as a whole passed.
    pub kind: SummaryStatusKind,
}

impl SummaryStatus {
    /// The status of results with no failures.
    pub fn successful() -> Self {
        Self {
            kind: SummaryStatusKind::Successful,
        }
    }

    /// The status of results with at least one failure.
    pub fn failed() -> Self {
        Self {
            kind: SummaryStatusKind::Failed,
        }
    }

    /// Returns true if this status represents a failure.
    pub fn is_failed(&self) -> bool {
        self.kind == SummaryStatusKind::Failed
    }
}

/// The kind of a [`SummaryStatus`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryStatusKind {
    /// No test failed and there were no other errors.
    #[default]
    Successful,

    /// A test failed, or there was an error outside of any test.
    Failed,
}
