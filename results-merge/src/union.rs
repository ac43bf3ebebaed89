// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::MergeError;
use test_results::TestResults;
use tracing::trace;

/// Combines results for the same framework from a single attempt, e.g. from parallel shards.
///
/// Tests, other errors and provenance are concatenated in input order. Tests are not
/// deduplicated: shards of one attempt are disjoint, and any tests that do share an identity are
/// kept as separate entries. Unknown top-level fields are kept from the first result that has
/// them. The summary is recomputed over the combined tests.
///
/// Returns an error if `batch` is empty or contains more than one framework.
pub fn union_batch(batch: impl IntoIterator<Item = TestResults>) -> Result<TestResults, MergeError> {
    let mut batch = batch.into_iter();
    let mut unioned = batch.next().ok_or(MergeError::EmptyBatch)?;
    let mut count = 1;

    for results in batch {
        if results.framework != unioned.framework {
            return Err(MergeError::FrameworkMismatch {
                expected: unioned.framework,
                found: results.framework,
            });
        }

        let TestResults {
            tests,
            other_errors,
            derived_from,
            extra,
            ..
        } = results;
        unioned.tests.extend(tests);
        unioned.other_errors.extend(other_errors);
        unioned.derived_from.extend(derived_from);
        for (key, value) in extra {
            unioned.extra.entry(key).or_insert(value);
        }
        count += 1;
    }

    trace!(
        framework = %unioned.framework,
        count,
        tests = unioned.tests.len(),
        "unioned batch of results"
    );
    unioned.recompute_summary();
    Ok(unioned)
}
