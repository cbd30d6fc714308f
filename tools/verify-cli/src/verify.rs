use crate::config::RunConfig;
use crate::reporter;
use crate::runner::{CommandCall, CommandRunner};
use crate::steps::{self, CheckResult};
use regex::Regex;
use std::io::{self, Write};
use std::time::Instant;

/// Run the verification gauntlet: toolchain pre-flight, then every
/// planned check in order. A failing check never stops the ones after
/// it; the aggregate exit code is 0 only when all of them passed.
pub fn run<W: Write>(
    writer: &mut W,
    runner: &dyn CommandRunner,
    config: &RunConfig,
) -> io::Result<i32> {
    reporter::print_header(writer)?;

    // Toolchain pre-flight runs even when every check is skipped.
    let probe = runner.run(&CommandCall::new("node", vec!["--version".to_string()]));
    if !probe.success() {
        reporter::print_toolchain_missing(writer, &probe.output)?;
        return Ok(1);
    }
    reporter::print_toolchain_ok(writer, parse_version(&probe.output).as_deref())?;

    let total = Instant::now();
    let mut results: Vec<CheckResult> = Vec::new();

    for step in steps::plan(config) {
        let started = Instant::now();
        let outcome = runner.run(&step.command);
        let result = CheckResult {
            name: step.name,
            passed: outcome.success(),
            output: outcome.output,
            elapsed_secs: started.elapsed().as_secs(),
        };
        reporter::print_result(writer, &result)?;
        results.push(result);
    }

    let all_passed = reporter::print_summary(writer, &results, total.elapsed().as_secs())?;
    Ok(if all_passed { 0 } else { 1 })
}

/// Pull the first semver-looking token out of version-query output.
pub fn parse_version(output: &str) -> Option<String> {
    let re = Regex::new(r"\d+\.\d+\.\d+").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}
