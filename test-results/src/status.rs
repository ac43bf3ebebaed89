// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a single test attempt.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStatus {
    /// The kind of outcome.
    pub kind: TestStatusKind,

    /// A message describing the outcome, e.g. an assertion failure or a skip reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The name of the exception or error type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    /// The backtrace, one frame per entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backtrace: Option<Vec<String>>,

    /// For [`TestStatusKind::Quarantined`], the status the test actually had.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_status: Option<Box<TestStatus>>,
}

impl TestStatus {
    /// Creates a new `TestStatus` of the given kind, with no message, exception or backtrace.
    pub fn new(kind: TestStatusKind) -> Self {
        Self {
            kind,
            message: None,
            exception: None,
            backtrace: None,
            original_status: None,
        }
    }

    /// Creates a new `TestStatus` that represents a successful test.
    pub fn successful() -> Self {
        Self::new(TestStatusKind::Successful)
    }

    /// Creates a new `TestStatus` that represents a failed test.
    pub fn failed() -> Self {
        Self::new(TestStatusKind::Failed)
    }

    /// Creates a new `TestStatus` that represents a canceled test.
    pub fn canceled() -> Self {
        Self::new(TestStatusKind::Canceled)
    }

    /// Creates a new `TestStatus` that represents a test that ran out of time.
    pub fn timed_out() -> Self {
        Self::new(TestStatusKind::TimedOut)
    }

    /// Creates a new `TestStatus` that represents a test that was not run.
    pub fn skipped() -> Self {
        Self::new(TestStatusKind::Skipped)
    }

    /// Creates a new `TestStatus` that represents a pending test.
    pub fn pended() -> Self {
        Self::new(TestStatusKind::Pended)
    }

    /// Creates a new `TestStatus` that represents a test marked as a todo.
    pub fn todo() -> Self {
        Self::new(TestStatusKind::Todo)
    }

    /// Creates a new `TestStatus` that wraps `original` as quarantined.
    ///
    /// A quarantined test reports success for gating purposes but keeps the status it actually
    /// had.
    pub fn quarantined(original: TestStatus) -> Self {
        Self {
            original_status: Some(Box::new(original)),
            ..Self::new(TestStatusKind::Quarantined)
        }
    }

    /// Sets the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
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

    /// Returns true if this status counts as a failure.
    ///
    /// Quarantined tests do not imply failure, even if their original status does.
    pub fn implies_failure(&self) -> bool {
        self.kind.implies_failure()
    }

    /// Returns true if this status means the test body was not executed to completion.
    pub fn implies_skipped(&self) -> bool {
        self.kind.implies_skipped()
    }

    /// Returns true if this is a [`TestStatusKind::Successful`] status.
    pub fn is_successful(&self) -> bool {
        self.kind == TestStatusKind::Successful
    }
}

/// The kind of a [`TestStatus`].
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TestStatusKind {
    /// The test passed.
    Successful,
    /// The test failed.
    Failed,
    /// The test was canceled before it finished.
    Canceled,
    /// The test exceeded its time limit.
    TimedOut,
    /// The test was not run.
    Skipped,
    /// The test is pending.
    Pended,
    /// The test is marked as a todo.
    Todo,
    /// The test is quarantined: its failures do not fail the run.
    Quarantined,
}

impl TestStatusKind {
    /// All status kinds, in declaration order.
    pub const ALL: [TestStatusKind; 8] = [
        Self::Successful,
        Self::Failed,
        Self::Canceled,
        Self::TimedOut,
        Self::Skipped,
        Self::Pended,
        Self::Todo,
        Self::Quarantined,
    ];

    /// Returns true if this kind counts as a failure: failed, canceled or timed out.
    pub fn implies_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Canceled | Self::TimedOut)
    }

    /// Returns true if this kind means the test was not executed: skipped, pended or todo.
    pub fn implies_skipped(self) -> bool {
        matches!(self, Self::Skipped | Self::Pended | Self::Todo)
    }

    /// Returns the name of this kind as it appears in serialized results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::TimedOut => "timedOut",
            Self::Skipped => "skipped",
            Self::Pended => "pended",
            Self::Todo => "todo",
            Self::Quarantined => "quarantined",
        }
    }
}

impl fmt::Display for TestStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
