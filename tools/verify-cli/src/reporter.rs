use crate::steps::CheckResult;
use owo_colors::OwoColorize;
use std::io::{self, Write};

const NAME_WIDTH: usize = 12;

pub fn print_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "TypeScript project verification".bold())?;
    writeln!(writer)
}

pub fn print_toolchain_ok<W: Write>(writer: &mut W, version: Option<&str>) -> io::Result<()> {
    let detail = match version {
        Some(version) => format!("v{version}"),
        None => "available".to_string(),
    };
    writeln!(
        writer,
        "  {} {:<width$} {}",
        "\u{2713}".green(),
        "node",
        detail.dimmed(),
        width = NAME_WIDTH
    )
}

pub fn print_toolchain_missing<W: Write>(writer: &mut W, probe_output: &str) -> io::Result<()> {
    writeln!(
        writer,
        "  {} {:<width$} {}",
        "\u{2717}".red(),
        "node",
        "not found".dimmed(),
        width = NAME_WIDTH
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "ERROR: Node.js is required but was not found.".red().bold()
    )?;
    writeln!(writer, "  brew install node@22  # or: nvm install 22")?;
    if !probe_output.trim().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", probe_output.trim_end())?;
    }
    writeln!(writer)
}

/// Streaming per-check line; failing checks get their captured output
/// printed underneath.
pub fn print_result<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    if result.passed {
        writeln!(
            writer,
            "  {} {:<width$} {}",
            "\u{2713}".green(),
            result.name,
            format!("{}s", result.elapsed_secs).dimmed(),
            width = NAME_WIDTH
        )
    } else {
        writeln!(
            writer,
            "  {} {:<width$} {}",
            "\u{2717}".red(),
            result.name,
            format!("{}s", result.elapsed_secs).dimmed(),
            width = NAME_WIDTH
        )?;
        if !result.output.trim().is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", result.output.trim_end())?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Print the final per-check PASSED/FAILED block and the overall verdict.
/// Returns true if every executed check passed (vacuously true for none).
pub fn print_summary<W: Write>(
    writer: &mut W,
    results: &[CheckResult],
    total_elapsed_secs: u64,
) -> io::Result<bool> {
    let mut all_passed = true;

    writeln!(writer)?;
    for result in results {
        if result.passed {
            writeln!(
                writer,
                "  {:<width$} {} {}",
                result.name,
                "\u{2713}".green(),
                "PASSED".green(),
                width = NAME_WIDTH
            )?;
        } else {
            writeln!(
                writer,
                "  {:<width$} {} {}",
                result.name,
                "\u{2717}".red(),
                "FAILED".red(),
                width = NAME_WIDTH
            )?;
            all_passed = false;
        }
    }

    writeln!(writer)?;
    if all_passed {
        writeln!(
            writer,
            "  {} {}",
            "PASS".green().bold(),
            format!("({total_elapsed_secs}s)").dimmed()
        )?;
    } else {
        writeln!(
            writer,
            "  {} {}",
            "FAIL".red().bold(),
            format!("({total_elapsed_secs}s)").dimmed()
        )?;
    }
    writeln!(writer)?;

    Ok(all_passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &'static str, passed: bool, output: &str) -> CheckResult {
        CheckResult {
            name,
            passed,
            output: output.to_string(),
            elapsed_secs: 1,
        }
    }

    fn rendered<F>(print: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut buffer = Vec::new();
        print(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn all_passing_summary_returns_true() {
        let results = vec![result("lint", true, ""), result("test", true, "")];
        let mut buffer = Vec::new();
        assert!(print_summary(&mut buffer, &results, 3).unwrap());
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("PASS"));
        assert!(!text.contains("FAILED"));
    }

    #[test]
    fn any_failure_returns_false() {
        let results = vec![result("lint", true, ""), result("format", false, "")];
        let mut buffer = Vec::new();
        assert!(!print_summary(&mut buffer, &results, 3).unwrap());
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("FAILED"));
        assert!(text.contains("FAIL"));
    }

    #[test]
    fn empty_results_pass_vacuously() {
        let mut buffer = Vec::new();
        assert!(print_summary(&mut buffer, &[], 0).unwrap());
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("PASS"));
        assert!(!text.contains("PASSED"));
    }

    #[test]
    fn summary_lists_every_executed_check() {
        let results = vec![
            result("lint", true, ""),
            result("typecheck", false, ""),
            result("test", true, ""),
        ];
        let text = rendered(|w| {
            print_summary(w, &results, 9).unwrap();
        });
        assert!(text.contains("lint"));
        assert!(text.contains("typecheck"));
        assert!(text.contains("test"));
    }

    #[test]
    fn failing_result_prints_captured_output() {
        let text = rendered(|w| {
            print_result(w, &result("lint", false, "src/a.ts:1 no-unused-vars")).unwrap();
        });
        assert!(text.contains("no-unused-vars"));
    }

    #[test]
    fn passing_result_stays_quiet() {
        let text = rendered(|w| {
            print_result(w, &result("lint", true, "checked 42 files")).unwrap();
        });
        assert!(!text.contains("checked 42 files"));
    }

    #[test]
    fn failing_result_with_empty_output_prints_no_body() {
        let text = rendered(|w| {
            print_result(w, &result("test", false, "  \n")).unwrap();
        });
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn toolchain_ok_shows_version_when_known() {
        let text = rendered(|w| {
            print_toolchain_ok(w, Some("22.12.0")).unwrap();
        });
        assert!(text.contains("v22.12.0"));
    }

    #[test]
    fn toolchain_missing_prints_fatal_error() {
        let text = rendered(|w| {
            print_toolchain_missing(w, "sh: node: not found").unwrap();
        });
        assert!(text.contains("ERROR"));
        assert!(text.contains("not found"));
    }
}
