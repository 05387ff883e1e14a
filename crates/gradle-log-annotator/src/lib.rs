//! Gradle Log Annotator
//!
//! A library for extracting Gradle test-failure reports from build log
//! output and turning them into GitHub Actions error annotations
//! (`::error file={f},line={l},title={t}::{message}`).
//!
//! # Example
//!
//! ```
//! use gradle_log_annotator::annotate;
//!
//! let log = "\
//! com.example.FooTest.testBar > executed FAILED
//!     expected:<1> but was:<2>
//!     at com.example.FooTest.testBar(FooTest.java:42)
//! ";
//!
//! for line in annotate(log) {
//!     println!("{line}");
//! }
//! ```

mod annotation;
mod parser;
mod types;

pub use annotation::{annotate, TEST_SOURCE_ROOT};
pub use parser::{parse_failure_log, parse_failures, ParseError};
pub use types::TestFailure;
