//! Type definitions for Gradle test-failure extraction

use serde::{Deserialize, Serialize};

/// A single test failure extracted from a Gradle build log
///
/// Corresponds to one failure block of the form:
///
/// ```text
/// com.example.FooTest.testBar > executed FAILED
///     expected:<1> but was:<2>
///     at com.example.FooTest.testBar(FooTest.java:42)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFailure {
    /// Dotted identifier naming the test (e.g. `com.example.FooTest.testBar`)
    pub qualified_name: String,

    /// Final dot-separated segment of `qualified_name`; the stack-trace
    /// reference is located by looking for `<simple_name>.java:<digits>`
    pub simple_name: String,

    /// Token between `>` and `FAILED` in the header (treated as opaque)
    pub failure_kind: String,

    /// First line of explanatory text following the failure header
    pub message: String,

    /// Digit run from the stack-trace reference, kept as the literal
    /// captured text so annotation output reproduces it verbatim
    pub line_number: String,
}

impl TestFailure {
    /// Create a new test failure
    pub fn new(
        qualified_name: impl Into<String>,
        simple_name: impl Into<String>,
        failure_kind: impl Into<String>,
        message: impl Into<String>,
        line_number: impl Into<String>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            simple_name: simple_name.into(),
            failure_kind: failure_kind.into(),
            message: message.into(),
            line_number: line_number.into(),
        }
    }

    /// Line number as an integer, for consumers that want one
    ///
    /// The annotation output uses the literal digit string instead, so
    /// leading zeros pass through untouched.
    pub fn line(&self) -> Option<usize> {
        self.line_number.parse().ok()
    }
}
