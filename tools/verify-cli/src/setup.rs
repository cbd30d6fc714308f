use crate::config::SetupConfig;
use crate::runner::{CommandCall, CommandRunner};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Body of the generated pre-commit hook. Rewritten on every run; local
/// edits to the hook do not survive a re-run.
pub const HOOK_TEMPLATE: &str = "npm run verify\n";

const HOOK_DIR: &str = ".husky";
const HOOK_FILE: &str = "pre-commit";

/// What the manifest edit ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestEdit {
    Added,
    AlreadyPresent,
}

/// Provision a husky pre-commit hook that runs `verify` on every commit.
/// Each stage gates the next; a stage failure aborts with exit 1. The
/// final manifest edit is the exception: it only ever warns.
pub fn run<W: Write>(
    writer: &mut W,
    runner: &dyn CommandRunner,
    _config: &SetupConfig,
    project_root: &Path,
) -> io::Result<i32> {
    writeln!(writer)?;
    writeln!(writer, "{}", "Setting up pre-commit verification".bold())?;
    writeln!(writer)?;

    let manifest_path = project_root.join("package.json");
    if !manifest_path.is_file() {
        writeln!(
            writer,
            "{}",
            "ERROR: package.json not found.".red().bold()
        )?;
        writeln!(writer, "  Run this from the project root.")?;
        return Ok(1);
    }

    // Hook-manager into the dev dependencies.
    let install = runner.run(
        &CommandCall::new(
            "npm",
            vec![
                "install".to_string(),
                "--save-dev".to_string(),
                "husky".to_string(),
            ],
        )
        .in_dir(project_root),
    );
    if !install.success() {
        return stage_failed(writer, "husky install", &install.output);
    }
    print_stage(writer, "husky installed")?;

    // Hook scaffolding.
    let init = runner.run(
        &CommandCall::new("npx", vec!["husky".to_string(), "init".to_string()])
            .in_dir(project_root),
    );
    if !init.success() {
        return stage_failed(writer, "husky init", &init.output);
    }
    print_stage(writer, "hook scaffolding initialized")?;

    // The hook itself, regenerated unconditionally.
    if let Err(error) = write_hook(project_root) {
        return stage_failed(writer, "hook write", &error.to_string());
    }
    print_stage(writer, ".husky/pre-commit written")?;

    // Manifest edit: warn, never fail.
    match ensure_verify_script(&manifest_path) {
        Ok(ManifestEdit::Added) => print_stage(writer, "verify script added to package.json")?,
        Ok(ManifestEdit::AlreadyPresent) => {
            writeln!(
                writer,
                "  {} {}",
                "\u{26a0}".yellow(),
                "package.json already defines a verify script; leaving it untouched".yellow()
            )?;
        }
        Err(error) => {
            writeln!(
                writer,
                "  {} {}",
                "\u{26a0}".yellow(),
                format!("could not update package.json: {error}").yellow()
            )?;
            writeln!(
                writer,
                "    add \"verify\": \"verify\" to its scripts manually"
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "Pre-commit hook installed.".green().bold())?;
    writeln!(writer, "  Checks now run on every git commit.")?;
    writeln!(writer, "  Run them manually with: npm run verify")?;
    writeln!(writer)?;
    Ok(0)
}

/// Write `.husky/pre-commit` from the fixed template and mark it
/// executable.
pub fn write_hook(project_root: &Path) -> io::Result<()> {
    let hook_dir = project_root.join(HOOK_DIR);
    fs::create_dir_all(&hook_dir)?;
    let hook_path = hook_dir.join(HOOK_FILE);
    fs::write(&hook_path, HOOK_TEMPLATE)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

/// Add `scripts.verify` to package.json unless it is already there.
/// Unknown keys survive the round-trip; output is pretty-printed with a
/// trailing newline.
pub fn ensure_verify_script(manifest_path: &Path) -> io::Result<ManifestEdit> {
    let text = fs::read_to_string(manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&text)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    let root = manifest.as_object_mut().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "package.json is not a JSON object")
    })?;

    let scripts = root
        .entry("scripts".to_string())
        .or_insert_with(|| json!({}));
    let scripts = scripts.as_object_mut().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "\"scripts\" is not a JSON object")
    })?;

    if scripts.contains_key("verify") {
        return Ok(ManifestEdit::AlreadyPresent);
    }
    scripts.insert("verify".to_string(), json!("verify"));

    let mut rendered = serde_json::to_string_pretty(&manifest)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    rendered.push('\n');
    fs::write(manifest_path, rendered)?;
    Ok(ManifestEdit::Added)
}

fn print_stage<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "  {} {}", "\u{2713}".green(), message)
}

fn stage_failed<W: Write>(writer: &mut W, stage: &str, output: &str) -> io::Result<i32> {
    writeln!(
        writer,
        "  {} {}",
        "\u{2717}".red(),
        format!("{stage} failed").red()
    )?;
    if !output.trim().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", output.trim_end())?;
    }
    Ok(1)
}
