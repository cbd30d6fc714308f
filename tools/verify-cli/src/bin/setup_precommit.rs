use std::io;
use std::process;

use verify_cli::config::SetupConfig;
use verify_cli::runner::RealCommandRunner;
use verify_cli::setup;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, warnings) = SetupConfig::parse(&args);
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let runner = RealCommandRunner;
    let mut stdout = io::stdout();
    let code = match setup::run(&mut stdout, &runner, &config, &project_root) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    process::exit(code);
}
