// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proptest strategies for generating test results.
//!
//! Identities are drawn from a deliberately small domain, so that generated attempts frequently
//! contain the same test more than once.

use crate::{Location, Test, TestAttempt, TestStatus, TestStatusKind};
use proptest::{collection::vec, option, prelude::*, sample::select};

/// Generates any status kind.
pub fn arb_status_kind() -> impl Strategy<Value = TestStatusKind> {
    select(TestStatusKind::ALL.to_vec())
}

/// Generates any status kind other than skipped.
pub fn arb_executed_status_kind() -> impl Strategy<Value = TestStatusKind> {
    arb_status_kind().prop_filter("status kind must not be skipped", |kind| {
        *kind != TestStatusKind::Skipped
    })
}

/// Generates an attempt with the given status kind and a random message.
pub fn arb_attempt_with_kind(kind: TestStatusKind) -> impl Strategy<Value = TestAttempt> {
    option::of("[a-z]{1,8}").prop_map(move |message| {
        let mut status = match kind {
            TestStatusKind::Quarantined => TestStatus::quarantined(TestStatus::failed()),
            kind => TestStatus::new(kind),
        };
        status.message = message;
        TestAttempt::new(status)
    })
}

/// Generates an attempt with any status.
pub fn arb_attempt() -> impl Strategy<Value = TestAttempt> {
    arb_status_kind().prop_flat_map(arb_attempt_with_kind)
}

/// Generates a test whose identity is drawn from a small domain and whose current attempt has
/// the given status kind.
///
/// Generated tests may carry past attempts, none of them skipped.
pub fn arb_test_with_kind(kind: TestStatusKind) -> impl Strategy<Value = Test> {
    (
        select(vec!["adds", "subtracts", "divides"]),
        option::of(select(vec!["unit", "integration"])),
        option::of(select(vec![1u32, 2])),
        arb_attempt_with_kind(kind),
        vec(arb_executed_status_kind().prop_flat_map(arb_attempt_with_kind), 0..2),
    )
        .prop_map(|(name, scope, line, attempt, past_attempts)| {
            let mut test = Test::new(name, attempt);
            test.scope = scope.map(str::to_owned);
            test.location = line.map(|line| {
                let mut location = Location::new("spec/math_spec.rb");
                location.set_line(line);
                location
            });
            test.past_attempts = past_attempts;
            test
        })
}

/// Generates a test whose identity is drawn from a small domain, with any status.
pub fn arb_test() -> impl Strategy<Value = Test> {
    arb_status_kind().prop_flat_map(arb_test_with_kind)
}

/// Generates a test that was not skipped.
pub fn arb_executed_test() -> impl Strategy<Value = Test> {
    arb_executed_status_kind().prop_flat_map(arb_test_with_kind)
}

/// Generates a skipped test.
pub fn arb_skipped_test() -> impl Strategy<Value = Test> {
    arb_test_with_kind(TestStatusKind::Skipped)
}
