//! Stdin-to-stdout filter for CI pipelines
//!
//! Pipe a Gradle build log in, get GitHub Actions error annotations
//! out, one line per failing test:
//!
//! ```text
//! ./gradlew test 2>&1 | gradle-annotate
//! ```
//!
//! Takes no arguments. Diagnostics go to stderr via `env_logger`, so
//! stdout stays clean for the annotation renderer.

use anyhow::{Context, Result};
use gradle_log_annotator::parse_failure_log;
use log::debug;
use std::io::Read;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read build log from stdin")?;
    debug!("read {} bytes of build log", input.len());

    let failures = parse_failure_log(&input).context("failed to decode build log")?;
    debug!("found {} test failure(s)", failures.len());

    for failure in &failures {
        println!("{}", failure.annotation_line());
    }

    Ok(())
}
