//! Failure-block scanning for Gradle build logs
//!
//! Gradle reports a failing test as a header line followed by the
//! assertion message and a stack trace:
//!
//! ```text
//! com.example.FooTest > testBar FAILED
//!     expected:<1> but was:<2>
//!         at com.example.FooTest.testBar(FooTest.java:42)
//! ```
//!
//! Rust's `regex` engine has no backtracking or backreferences, so the
//! lazy multi-line match is done in two phases: a compiled regex finds
//! candidate headers, then a linear scan walks forward line by line for
//! the nearest stack-trace reference naming the test's source file.

use crate::types::TestFailure;
use log::debug;
use regex::Regex;
use std::str::Utf8Error;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur when parsing a raw log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid UTF-8 in log content")]
    Utf8(#[from] Utf8Error),
}

/// Parse test failures from raw log bytes
///
/// Byte-level entry point for callers holding an undecoded log stream.
/// See [`parse_failures`] for the matching rules.
pub fn parse_failure_log(log: &[u8]) -> Result<Vec<TestFailure>, ParseError> {
    let text = std::str::from_utf8(log)?;
    Ok(parse_failures(text))
}

/// Parse every test-failure block out of log text
///
/// Failures are returned in order of appearance. Matches never overlap:
/// the scan resumes right after the captured line number of a completed
/// block, so a header swallowed by a previous block's reference search
/// produces no failure of its own. A header whose reference is never
/// found contributes nothing; unrelated text contributes nothing.
pub fn parse_failures(log: &str) -> Vec<TestFailure> {
    let mut failures = Vec::new();
    let mut pos = 0;

    while let Some(header) = next_header(log, pos) {
        match complete_block(log, &header) {
            Some(block) => {
                debug!(
                    "matched failure block for {} at line reference {}",
                    header.qualified_name, block.line_number
                );
                pos = block.end;
                failures.push(TestFailure::new(
                    header.qualified_name,
                    header.simple_name,
                    header.failure_kind,
                    block.message,
                    block.line_number,
                ));
            }
            None => {
                debug!(
                    "no stack-trace reference found for {}, skipping header",
                    header.qualified_name
                );
                pos = header.end;
            }
        }
    }

    failures
}

/// A candidate failure header, up to and including its newline
struct Header<'a> {
    /// Dotted test identifier captured before ` > `
    qualified_name: &'a str,
    /// Final dot-separated segment of the qualified name
    simple_name: &'a str,
    /// Token between `>` and `FAILED`
    failure_kind: &'a str,
    /// Offset just past the header's newline
    end: usize,
}

/// The completed remainder of a failure block
struct Block {
    /// First line holding non-whitespace after the header
    message: String,
    /// Literal digit run from the stack-trace reference
    line_number: String,
    /// Offset just past the captured digits; the scan resumes here
    end: usize,
}

fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    HEADER_REGEX.get_or_init(|| {
        // Qualified name (non-whitespace with at least one dot, final
        // segment dot-free), failure kind, FAILED immediately before a
        // newline. Headers may start mid-line (timestamp prefixes).
        Regex::new(r"(\S+\.([^\s.]+)) > (\S+) FAILED\n").unwrap()
    })
}

/// Find the leftmost failure header at or after `from`
fn next_header(log: &str, from: usize) -> Option<Header<'_>> {
    let caps = header_regex().captures_at(log, from)?;
    Some(Header {
        qualified_name: caps.get(1)?.as_str(),
        simple_name: caps.get(2)?.as_str(),
        failure_kind: caps.get(3)?.as_str(),
        end: caps.get(0)?.end(),
    })
}

/// Complete a candidate header into a full failure block
///
/// Whitespace after the header, blank lines included, is skipped
/// greedily; the message is the remainder of the first line holding
/// anything else. The stack-trace reference is then searched strictly
/// below the message line, nearest line first, to the end of the log.
/// The search does not stop at the next failure header, so a block
/// without its own reference can consume into later blocks.
fn complete_block(log: &str, header: &Header<'_>) -> Option<Block> {
    let msg_start = header.end
        + log[header.end..].find(|c: char| !c.is_whitespace())?;
    // A log ending on the message line leaves no room for a reference
    let msg_end = msg_start + log[msg_start..].find('\n')?;
    let message = &log[msg_start..msg_end];

    let needles = reference_needles(header.qualified_name);
    let mut line_start = msg_end + 1;
    loop {
        let line_end = log[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(log.len());
        if let Some((digits_start, digits_end)) =
            reference_in_line(&log[line_start..line_end], &needles)
        {
            return Some(Block {
                message: message.to_string(),
                line_number: log[line_start + digits_start..line_start + digits_end].to_string(),
                end: line_start + digits_end,
            });
        }
        if line_end == log.len() {
            return None;
        }
        line_start = line_end + 1;
    }
}

/// Tokens that mark a line as this test's stack-trace reference
///
/// Gradle headers carry the test class (`com.example.FooTest > testBar
/// FAILED`) and the trace frame names the class file
/// (`FooTest.java:42`), but qualified names that include the method
/// segment appear too, so any segment of the qualified name may name
/// the source file.
fn reference_needles(qualified_name: &str) -> Vec<String> {
    qualified_name
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("{segment}.java:"))
        .collect()
}

/// Locate a `<segment>.java:<digits>` reference within one line
///
/// Returns the byte range of the digit run. When a line holds several
/// references the last one wins, mirroring the greedy scan of the
/// original pattern.
fn reference_in_line(line: &str, needles: &[String]) -> Option<(usize, usize)> {
    let mut found: Option<(usize, usize)> = None;
    for needle in needles {
        for (idx, _) in line.match_indices(needle.as_str()) {
            let digits_start = idx + needle.len();
            let digits_len = line[digits_start..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if digits_len == 0 {
                continue;
            }
            if found.is_none_or(|(start, _)| digits_start > start) {
                found = Some((digits_start, digits_start + digits_len));
            }
        }
    }
    found
}
