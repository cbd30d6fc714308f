use std::io;
use std::process;

use verify_cli::config::RunConfig;
use verify_cli::runner::RealCommandRunner;
use verify_cli::verify;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, warnings) = RunConfig::parse(&args);
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let runner = RealCommandRunner;
    let mut stdout = io::stdout();
    let code = match verify::run(&mut stdout, &runner, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    process::exit(code);
}
