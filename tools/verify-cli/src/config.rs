/// Coverage threshold used when `--min-coverage` is absent or unparsable.
pub const DEFAULT_MIN_COVERAGE: u32 = 80;

/// Parsed flags for one `verify` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub fix: bool,
    pub format_write: bool,
    pub skip_lint: bool,
    pub skip_format: bool,
    pub skip_type_check: bool,
    pub skip_tests: bool,
    pub coverage: bool,
    pub min_coverage: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fix: false,
            format_write: false,
            skip_lint: false,
            skip_format: false,
            skip_type_check: false,
            skip_tests: false,
            coverage: true,
            min_coverage: DEFAULT_MIN_COVERAGE,
        }
    }
}

impl RunConfig {
    /// Parse the raw argument list (argv without the program name).
    /// Unrecognized arguments never abort a run; they come back as
    /// warnings for the caller to print.
    pub fn parse(args: &[String]) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--fix" => config.fix = true,
                "--format" => config.format_write = true,
                "--skip-lint" => config.skip_lint = true,
                "--skip-format" => config.skip_format = true,
                "--skip-type-check" => config.skip_type_check = true,
                "--skip-tests" => config.skip_tests = true,
                "--no-coverage" => config.coverage = false,
                "--min-coverage" => {
                    if i + 1 < args.len() {
                        i += 1;
                        config.min_coverage = parse_threshold(&args[i]);
                    }
                }
                arg => {
                    if let Some(value) = arg.strip_prefix("--min-coverage=") {
                        config.min_coverage = parse_threshold(value);
                    } else {
                        warnings.push(format!("unrecognized argument: {arg}"));
                    }
                }
            }
            i += 1;
        }

        (config, warnings)
    }
}

/// Parsed flags for one `setup-precommit` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupConfig {
    /// Accepted for compatibility with the script this tool replaces;
    /// conditions nothing.
    pub skip_run: bool,
}

impl SetupConfig {
    pub fn parse(args: &[String]) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--skip-run" => config.skip_run = true,
                other => warnings.push(format!("unrecognized argument: {other}")),
            }
        }

        (config, warnings)
    }
}

fn parse_threshold(raw: &str) -> u32 {
    raw.parse().unwrap_or(DEFAULT_MIN_COVERAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (RunConfig, Vec<String>) {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        RunConfig::parse(&owned)
    }

    #[test]
    fn defaults_enable_everything_with_coverage_at_80() {
        let (config, warnings) = parse(&[]);
        assert_eq!(config, RunConfig::default());
        assert!(config.coverage);
        assert_eq!(config.min_coverage, 80);
        assert!(warnings.is_empty());
    }

    #[test]
    fn fix_and_format_flags() {
        let (config, _) = parse(&["--fix", "--format"]);
        assert!(config.fix);
        assert!(config.format_write);
    }

    #[test]
    fn skip_flags_disable_each_step() {
        let (config, _) = parse(&[
            "--skip-lint",
            "--skip-format",
            "--skip-type-check",
            "--skip-tests",
        ]);
        assert!(config.skip_lint);
        assert!(config.skip_format);
        assert!(config.skip_type_check);
        assert!(config.skip_tests);
    }

    #[test]
    fn no_coverage_disables_coverage() {
        let (config, _) = parse(&["--no-coverage"]);
        assert!(!config.coverage);
    }

    #[test]
    fn min_coverage_equals_form() {
        let (config, _) = parse(&["--min-coverage=95"]);
        assert_eq!(config.min_coverage, 95);
    }

    #[test]
    fn min_coverage_space_form() {
        let (config, _) = parse(&["--min-coverage", "70"]);
        assert_eq!(config.min_coverage, 70);
    }

    #[test]
    fn min_coverage_garbage_falls_back_to_default() {
        let (config, _) = parse(&["--min-coverage=ninety"]);
        assert_eq!(config.min_coverage, DEFAULT_MIN_COVERAGE);
    }

    #[test]
    fn min_coverage_without_value_keeps_default() {
        let (config, _) = parse(&["--min-coverage"]);
        assert_eq!(config.min_coverage, DEFAULT_MIN_COVERAGE);
    }

    #[test]
    fn unrecognized_argument_becomes_warning() {
        let (config, warnings) = parse(&["--skip-lint", "--frobnicate"]);
        assert!(config.skip_lint);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("--frobnicate"));
    }

    #[test]
    fn setup_parses_skip_run() {
        let args = vec!["--skip-run".to_string()];
        let (config, warnings) = SetupConfig::parse(&args);
        assert!(config.skip_run);
        assert!(warnings.is_empty());
    }

    #[test]
    fn setup_warns_on_unknown_flag() {
        let args = vec!["--force".to_string()];
        let (config, warnings) = SetupConfig::parse(&args);
        assert!(!config.skip_run);
        assert_eq!(warnings.len(), 1);
    }
}
