//! GitHub Actions error-annotation formatting
//!
//! Produces workflow-command lines of the form
//! `::error file={f},line={l},title={t}::{message}`, the syntax GitHub
//! Actions renders as inline error markers on the named file and line.

use crate::parser::parse_failures;
use crate::types::TestFailure;

/// Root of the conventional Java test source tree; every derived
/// annotation path starts here
pub const TEST_SOURCE_ROOT: &str = "src/test/java";

impl TestFailure {
    /// Source path the annotation points at
    ///
    /// Dots in the qualified name become path separators under
    /// [`TEST_SOURCE_ROOT`]: `a.b.C` -> `src/test/java/a/b/C.java`. The
    /// substitution is purely mechanical, so a qualified name carrying a
    /// method segment produces a path for that segment too.
    pub fn source_path(&self) -> String {
        format!(
            "{TEST_SOURCE_ROOT}/{}.java",
            self.qualified_name.replace('.', "/")
        )
    }

    /// The annotation line for this failure
    ///
    /// All fields pass through verbatim; characters meaningful to the
    /// workflow-command syntax are not escaped.
    pub fn annotation_line(&self) -> String {
        format!(
            "::error file={},line={},title=Failed in {}::{}",
            self.source_path(),
            self.line_number,
            self.failure_kind,
            self.message
        )
    }
}

/// Extract every failure block from `log` and format one annotation
/// line per block, in order of appearance
///
/// A log with no failure blocks yields an empty vector.
pub fn annotate(log: &str) -> Vec<String> {
    parse_failures(log)
        .iter()
        .map(TestFailure::annotation_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_path_derivation() {
        let failure = TestFailure::new("a.b.C", "C", "executed", "boom", "1");
        assert_eq!(failure.source_path(), "src/test/java/a/b/C.java");
    }

    #[test]
    fn test_annotation_line_format() {
        let log = "\
com.example.FooTest.testBar > executed FAILED
    expected:<1> but was:<2>
    at com.example.FooTest.testBar(FooTest.java:42)
";
        let lines = annotate(log);
        assert_eq!(
            lines,
            vec![
                "::error file=src/test/java/com/example/FooTest/testBar.java,line=42,title=Failed in executed::expected:<1> but was:<2>"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_fields_pass_through_verbatim() {
        // No escaping: annotation-significant characters survive as-is
        let failure = TestFailure::new(
            "com.example.FooTest",
            "FooTest",
            "test::weird,case",
            "value was ::error, line=9",
            "3",
        );
        assert_eq!(
            failure.annotation_line(),
            "::error file=src/test/java/com/example/FooTest.java,line=3,title=Failed in test::weird,case::value was ::error, line=9"
        );
    }

    #[test]
    fn test_no_failures_no_lines() {
        assert!(annotate("BUILD SUCCESSFUL in 4s\n").is_empty());
    }
}
