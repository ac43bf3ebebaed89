// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// The test tool that produced a set of results.
///
/// Results are grouped, unioned and reconciled per framework. Two results belong to the same
/// framework if all four fields are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    /// The language the tests are written in.
    pub language: FrameworkLanguage,

    /// The kind of test framework.
    pub kind: FrameworkKind,

    /// For [`FrameworkLanguage::Other`], the language name the user provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_language: Option<String>,

    /// For [`FrameworkKind::Other`], the framework name the user provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_kind: Option<String>,
}

impl Framework {
    /// Creates a new `Framework` for a known language and kind.
    pub fn new(language: FrameworkLanguage, kind: FrameworkKind) -> Self {
        Self {
            language,
            kind,
            provided_language: None,
            provided_kind: None,
        }
    }

    /// Creates a framework that isn't in the known catalogue, recording the names the user
    /// provided for it.
    pub fn other(provided_language: impl Into<String>, provided_kind: impl Into<String>) -> Self {
        Self {
            language: FrameworkLanguage::Other,
            kind: FrameworkKind::Other,
            provided_language: Some(provided_language.into()),
            provided_kind: Some(provided_kind.into()),
        }
    }

    /// Returns true if either the language or the kind is outside the known catalogue.
    pub fn is_other(&self) -> bool {
        self.language == FrameworkLanguage::Other || self.kind == FrameworkKind::Other
    }

    /// Returns true if this framework carries user-provided names.
    pub fn is_provided(&self) -> bool {
        self.provided_language.is_some() || self.provided_kind.is_some()
    }

    /// Returns the language name to display: the provided name if set.
    pub fn language_name(&self) -> &str {
        self.provided_language
            .as_deref()
            .unwrap_or(self.language.as_str())
    }

    /// Returns the framework name to display: the provided name if set.
    pub fn kind_name(&self) -> &str {
        self.provided_kind
            .as_deref()
            .unwrap_or(self.kind.as_str())
    }
}

// Frameworks sort by the string forms of language and kind, so output order is alphabetical
// rather than catalogue order.
impl Ord for Framework {
    fn cmp(&self, other: &Self) -> Ordering {
        self.language
            .as_str()
            .cmp(other.language.as_str())
            .then_with(|| self.kind.as_str().cmp(other.kind.as_str()))
            .then_with(|| self.provided_language.cmp(&other.provided_language))
            .then_with(|| self.provided_kind.cmp(&other.provided_kind))
    }
}

impl PartialOrd for Framework {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind_name(), self.language_name())
    }
}

/// A language in the known framework catalogue.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub enum FrameworkLanguage {
    /// Ruby.
    Ruby,
    /// JavaScript and TypeScript.
    JavaScript,
    /// Go.
    Go,
    /// Python.
    Python,
    /// Elixir.
    Elixir,
    /// .NET languages.
    #[serde(rename = ".NET")]
    DotNet,
    /// A language outside the catalogue.
    Other,
}

impl FrameworkLanguage {
    /// Returns the name of this language as it appears in serialized results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ruby => "Ruby",
            Self::JavaScript => "JavaScript",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::Elixir => "Elixir",
            Self::DotNet => ".NET",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FrameworkLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test framework in the known catalogue.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub enum FrameworkKind {
    /// RSpec (Ruby).
    RSpec,
    /// Cucumber (Ruby or JavaScript).
    Cucumber,
    /// minitest (Ruby).
    #[serde(rename = "minitest")]
    Minitest,
    /// Cypress (JavaScript).
    Cypress,
    /// Jest (JavaScript).
    Jest,
    /// Karma (JavaScript).
    Karma,
    /// Mocha (JavaScript).
    Mocha,
    /// Playwright (JavaScript).
    Playwright,
    /// Vitest (JavaScript).
    Vitest,
    /// `go test`.
    #[serde(rename = "go test")]
    GoTest,
    /// Ginkgo (Go).
    Ginkgo,
    /// pytest (Python).
    #[serde(rename = "pytest")]
    Pytest,
    /// ExUnit (Elixir).
    ExUnit,
    /// xUnit (.NET).
    #[serde(rename = "xUnit")]
    XUnit,
    /// A framework outside the catalogue.
    Other,
}

impl FrameworkKind {
    /// Returns the name of this framework as it appears in serialized results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RSpec => "RSpec",
            Self::Cucumber => "Cucumber",
            Self::Minitest => "minitest",
            Self::Cypress => "Cypress",
            Self::Jest => "Jest",
            Self::Karma => "Karma",
            Self::Mocha => "Mocha",
            Self::Playwright => "Playwright",
            Self::Vitest => "Vitest",
            Self::GoTest => "go test",
            Self::Ginkgo => "Ginkgo",
            Self::Pytest => "pytest",
            Self::ExUnit => "ExUnit",
            Self::XUnit => "xUnit",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FrameworkLanguage::DotNet, "\".NET\"" ; "dotnet")]
    #[test_case(FrameworkLanguage::JavaScript, "\"JavaScript\"" ; "javascript")]
    #[test_case(FrameworkLanguage::Other, "\"Other\"" ; "other")]
    fn language_serializes_as_catalogue_name(language: FrameworkLanguage, expected: &str) {
        assert_eq!(
            serde_json::to_string(&language).expect("serializing a language succeeds"),
            expected
        );
        assert_eq!(format!("\"{language}\""), expected);
    }

    #[test_case(FrameworkKind::GoTest, "\"go test\"" ; "go test")]
    #[test_case(FrameworkKind::Minitest, "\"minitest\"" ; "minitest")]
    #[test_case(FrameworkKind::XUnit, "\"xUnit\"" ; "xunit")]
    #[test_case(FrameworkKind::RSpec, "\"RSpec\"" ; "rspec")]
    fn kind_serializes_as_catalogue_name(kind: FrameworkKind, expected: &str) {
        assert_eq!(
            serde_json::to_string(&kind).expect("serializing a kind succeeds"),
            expected
        );
        assert_eq!(format!("\"{kind}\""), expected);
    }

    #[test]
    fn frameworks_sort_by_language_then_kind() {
        let mut frameworks = vec![
            Framework::new(FrameworkLanguage::Ruby, FrameworkKind::RSpec),
            Framework::new(FrameworkLanguage::JavaScript, FrameworkKind::Jest),
            Framework::other("Zig", "zig test"),
            Framework::new(FrameworkLanguage::Ruby, FrameworkKind::Cucumber),
            Framework::new(FrameworkLanguage::DotNet, FrameworkKind::XUnit),
            Framework::other("Haskell", "hspec"),
        ];
        frameworks.sort();

        let names: Vec<_> = frameworks.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            [
                "xUnit (.NET)",
                "Jest (JavaScript)",
                "hspec (Haskell)",
                "zig test (Zig)",
                "Cucumber (Ruby)",
                "RSpec (Ruby)",
            ]
        );
    }

    #[test]
    fn other_framework_round_trips() {
        let framework = Framework::other("Zig", "zig test");
        assert!(framework.is_other());
        assert!(framework.is_provided());

        let json = serde_json::to_value(&framework).expect("serializing succeeds");
        assert_eq!(
            json,
            serde_json::json!({
                "language": "Other",
                "kind": "Other",
                "providedLanguage": "Zig",
                "providedKind": "zig test",
            })
        );
        let back: Framework = serde_json::from_value(json).expect("deserializing succeeds");
        assert_eq!(back, framework);
    }

    #[test]
    fn known_framework_omits_provided_names() {
        let framework = Framework::new(FrameworkLanguage::Go, FrameworkKind::GoTest);
        assert!(!framework.is_other());
        assert_eq!(
            serde_json::to_value(&framework).expect("serializing succeeds"),
            serde_json::json!({ "language": "Go", "kind": "go test" })
        );
    }
}
