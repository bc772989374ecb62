use std::process;

use check_pr_title::Cli;
use clap::Parser;

fn main() {
    // Logs go to stderr so they never mix with the check's stdout lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            e.print().ok();
            process::exit(code);
        }
    };

    match cli.execute() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");

            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }

            process::exit(1);
        }
    }
}
