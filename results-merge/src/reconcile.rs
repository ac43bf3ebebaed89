// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconciliation of test results across retry attempts.
//!
//! Given one framework's results for each attempt, oldest first, this module decides for every
//! logical test which attempt is current and which are past attempts:
//!
//! * The first attempt seeds the set of known tests, exactly as given.
//! * Each test in a later attempt is matched against the first known test with the same
//!   [`TestIdentity`](test_results::TestIdentity) that hasn't already been matched during that
//!   attempt. Unmatched tests are new, and are added to the set (and optionally annotated). A
//!   new entry can itself be matched by a later test in the same attempt.
//! * Skipped tests in later attempts did not run, so they are ignored entirely.
//! * Once every attempt has been folded in, each matched test's current attempt is its earliest
//!   successful attempt, or its latest attempt if none succeeded. All other attempts become past
//!   attempts, oldest first. Tests first seen after the first attempt keep their annotation on
//!   whichever attempt ends up current.

use crate::{
    config::{AnnotationConfig, MISSING_IN_PREVIOUS_BATCH_KEY},
    errors::MergeError,
};
use std::collections::HashMap;
use test_results::{
    Framework, Location, Test, TestAttempt, TestIdentity, TestResults, TestStatusKind,
};
use tracing::{debug, trace};

/// Reconciles one framework's results across attempts.
///
/// `attempts` is ordered oldest first, with one entry per attempt: `None` if the framework did
/// not produce results in that attempt, otherwise that attempt's results, already combined with
/// [`union_batch`](crate::union_batch).
///
/// Other errors and provenance from every attempt are concatenated in attempt order, and the
/// summary is recomputed over the reconciled tests.
///
/// Returns an error if `attempts` is empty, if no attempt has results, or if any results belong
/// to a framework other than `framework`.
pub fn reconcile(
    framework: Framework,
    attempts: impl IntoIterator<Item = Option<TestResults>>,
    annotations: &AnnotationConfig,
) -> Result<TestResults, MergeError> {
    let mut attempts = attempts.into_iter().peekable();
    if attempts.peek().is_none() {
        return Err(MergeError::NoAttempts);
    }

    let mut accumulator = Accumulator::new();
    let mut reconciled: Option<TestResults> = None;
    let mut stats = FoldStats::default();
    let mut attempt_count = 0;

    for (attempt_index, results) in attempts.enumerate() {
        attempt_count += 1;
        let Some(results) = results else {
            trace!(%framework, attempt_index, "framework absent from attempt");
            continue;
        };
        if results.framework != framework {
            return Err(MergeError::FrameworkMismatch {
                expected: framework,
                found: results.framework,
            });
        }

        let TestResults {
            schema,
            framework: _,
            summary: _,
            tests,
            other_errors,
            derived_from,
            extra,
        } = results;

        if attempt_index == 0 {
            accumulator.seed(tests);
        } else {
            accumulator.fold(attempt_index, tests, annotations, &mut stats);
        }

        let merged = reconciled.get_or_insert_with(|| {
            let mut empty = TestResults::empty(framework.clone());
            empty.schema = schema;
            empty
        });
        merged.other_errors.extend(other_errors);
        merged.derived_from.extend(derived_from);
        for (key, value) in extra {
            merged.extra.entry(key).or_insert(value);
        }
    }

    let Some(mut reconciled) = reconciled else {
        return Err(MergeError::FrameworkNotObserved { framework });
    };

    reconciled.tests = accumulator.finish(annotations);
    reconciled.recompute_summary();

    debug!(
        %framework,
        attempts = attempt_count,
        tests = reconciled.tests.len(),
        matched = stats.matched,
        new = stats.new,
        skipped = stats.skipped,
        retries = reconciled.summary.retries,
        "reconciled test results across attempts"
    );
    Ok(reconciled)
}

#[derive(Clone, Copy, Debug, Default)]
struct FoldStats {
    matched: usize,
    new: usize,
    skipped: usize,
}

/// The set of known tests, in first-seen order, along with the occurrences matched to each.
#[derive(Debug)]
struct Accumulator {
    entries: Vec<Entry>,
    // Indexes into `entries` for each identity, in ascending order.
    by_identity: HashMap<IdentityKey, Vec<usize>>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_identity: HashMap::new(),
        }
    }

    fn seed(&mut self, tests: Vec<Test>) {
        for test in tests {
            self.push(IdentityKey::new(test.identity()), 0, test);
        }
    }

    fn push(&mut self, key: IdentityKey, attempt_index: usize, test: Test) {
        self.by_identity
            .entry(key)
            .or_default()
            .push(self.entries.len());
        self.entries.push(Entry {
            attempt_index,
            test,
            occurrences: Vec::new(),
        });
    }

    /// Folds in the tests of a later attempt.
    fn fold(
        &mut self,
        attempt_index: usize,
        tests: Vec<Test>,
        annotations: &AnnotationConfig,
        stats: &mut FoldStats,
    ) {
        // Matching always takes the first unconsumed entry for an identity, and a new entry is
        // only added once all existing ones are consumed. So the consumed entries for an identity
        // are always a prefix of `by_identity[key]`, and a count is enough to track them. A new
        // entry is not consumed until a later test in this attempt matches it.
        let mut consumed: HashMap<IdentityKey, usize> = HashMap::new();

        for mut test in tests {
            if test.attempt.status.kind == TestStatusKind::Skipped {
                trace!(attempt_index, name = %test.name, "ignoring skipped test");
                stats.skipped += 1;
                continue;
            }

            let key = IdentityKey::new(test.identity());
            let taken = consumed.entry(key.clone()).or_default();
            let matched = self
                .by_identity
                .get(&key)
                .and_then(|indexes| indexes.get(*taken))
                .copied();

            match matched {
                Some(index) => {
                    *taken += 1;
                    trace!(attempt_index, name = %test.name, index, "matched test");
                    stats.matched += 1;
                    self.entries[index]
                        .occurrences
                        .push(Occurrence::new(attempt_index, test));
                }
                None => {
                    trace!(attempt_index, name = %test.name, "test not seen in earlier attempts");
                    stats.new += 1;
                    if annotations.annotate_new_tests {
                        test.tag(&annotations.namespace, MISSING_IN_PREVIOUS_BATCH_KEY, true);
                    }
                    self.push(key, attempt_index, test);
                }
            }
        }
    }

    fn finish(self, annotations: &AnnotationConfig) -> Vec<Test> {
        self.entries
            .into_iter()
            .map(|entry| entry.resolve(annotations))
            .collect()
    }
}

#[derive(Debug)]
struct Entry {
    // The attempt this test was first seen in.
    attempt_index: usize,
    test: Test,
    // Occurrences matched after the test was first seen, in order.
    occurrences: Vec<Occurrence>,
}

impl Entry {
    /// Picks the current attempt among the test's own attempt and its occurrences.
    fn resolve(self, annotations: &AnnotationConfig) -> Test {
        let Entry {
            attempt_index,
            test,
            occurrences,
        } = self;
        if occurrences.is_empty() {
            return test;
        }

        let Test {
            scope,
            id,
            name,
            lineage,
            location,
            attempt,
            mut past_attempts,
        } = test;

        let candidates: Vec<Occurrence> = std::iter::once(Occurrence {
            attempt_index,
            attempt,
            prior_attempts: Vec::new(),
        })
        .chain(occurrences)
        .collect();

        let current_index = choose_current(&candidates);
        trace!(
            %name,
            candidates = candidates.len(),
            current_attempt = candidates[current_index].attempt_index,
            "resolved current attempt"
        );
        let mut current = None;
        for (index, candidate) in candidates.into_iter().enumerate() {
            past_attempts.extend(candidate.prior_attempts);
            if index == current_index {
                current = Some(candidate.attempt);
            } else if candidate.attempt.status.kind == TestStatusKind::Skipped {
                // A skipped attempt never ran, so it isn't part of the history.
                trace!(%name, "dropping superseded skipped attempt");
            } else {
                past_attempts.push(candidate.attempt);
            }
        }

        let mut current = current.expect("current_index is within candidates");
        if attempt_index > 0 && annotations.annotate_new_tests {
            current.tag(&annotations.namespace, MISSING_IN_PREVIOUS_BATCH_KEY, true);
        }

        Test {
            scope,
            id,
            name,
            lineage,
            location,
            attempt: current,
            past_attempts,
        }
    }
}

/// Returns the index of the earliest successful candidate, or of the last candidate if none
/// succeeded.
///
/// `candidates` must be non-empty.
fn choose_current(candidates: &[Occurrence]) -> usize {
    candidates
        .iter()
        .position(|candidate| candidate.attempt.status.is_successful())
        .unwrap_or(candidates.len() - 1)
}

/// One outcome of a known test within a later attempt.
#[derive(Debug)]
struct Occurrence {
    attempt_index: usize,
    attempt: TestAttempt,
    // Attempts the producing runner itself superseded within this attempt, oldest first.
    prior_attempts: Vec<TestAttempt>,
}

impl Occurrence {
    fn new(attempt_index: usize, test: Test) -> Self {
        let prior_attempts = test
            .past_attempts
            .into_iter()
            .filter(|attempt| attempt.status.kind != TestStatusKind::Skipped)
            .collect();
        Self {
            attempt_index,
            attempt: test.attempt,
            prior_attempts,
        }
    }
}

/// An owned form of [`TestIdentity`], used as a map key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct IdentityKey {
    scope: Option<String>,
    id: Option<String>,
    name: String,
    lineage: Option<Vec<String>>,
    location: Option<Location>,
}

impl IdentityKey {
    fn new(identity: TestIdentity<'_>) -> Self {
        Self {
            scope: identity.scope.map(str::to_owned),
            id: identity.id.map(str::to_owned),
            name: identity.name.to_owned(),
            lineage: identity.lineage.map(<[String]>::to_vec),
            location: identity.location.cloned(),
        }
    }
}
