//! procq 命令行
//!
//! ```bash
//! procq 1/status/Uid/effective
//! procq --list cpuinfo/0
//! PROCQ_ROOT=/host/proc procq loadavg
//! ```

use std::process::ExitCode;

use clap::Parser;
use procq::Config;

#[derive(Parser)]
#[command(name = "procq")]
#[command(version)]
#[command(about = "Query /proc as a tree of typed values")]
struct Cli {
    /// Slash-separated path, e.g. 1/status/Uid/effective (empty for the root)
    #[arg(default_value = "")]
    path: String,

    /// List the child names of the path instead of printing its value
    #[arg(short, long)]
    list: bool,

    #[command(flatten)]
    config: Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.config.init_logging();

    let fs = cli.config.procfs();
    match procq::cli::execute(&fs, &cli.path, cli.list) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{}", failure.message);
            ExitCode::from(failure.code)
        }
    }
}
