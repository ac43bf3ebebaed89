// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for building results in tests.

use test_results::{
    Framework, FrameworkKind, FrameworkLanguage, Test, TestAttempt, TestResults, TestStatus,
};

pub(crate) fn rspec() -> Framework {
    Framework::new(FrameworkLanguage::Ruby, FrameworkKind::RSpec)
}

pub(crate) fn jest() -> Framework {
    Framework::new(FrameworkLanguage::JavaScript, FrameworkKind::Jest)
}

pub(crate) fn test_with(name: &str, status: TestStatus) -> Test {
    Test::new(name, TestAttempt::new(status))
}

pub(crate) fn successful(name: &str) -> Test {
    test_with(name, TestStatus::successful())
}

pub(crate) fn failed(name: &str) -> Test {
    test_with(name, TestStatus::failed())
}

pub(crate) fn skipped(name: &str) -> Test {
    test_with(name, TestStatus::skipped())
}

/// A failed test whose message tells attempts apart.
pub(crate) fn failed_with(name: &str, message: &str) -> Test {
    let mut status = TestStatus::failed();
    status.set_message(message);
    test_with(name, status)
}

pub(crate) fn attempt_failed_with(message: &str) -> TestAttempt {
    failed_with("", message).attempt
}

pub(crate) fn results(framework: Framework, tests: impl IntoIterator<Item = Test>) -> TestResults {
    TestResults::new(framework, tests.into_iter().collect(), vec![], vec![])
}
