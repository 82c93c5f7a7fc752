//! # `oj`
//!
//! `oj` is a command-line tool for online judge services: downloading sample
//! cases, logging in, submitting solutions and testing them locally.
//!
//! ## Usage
//!
//! ```sh
//! oj download https://atcoder.jp/contests/abc100/tasks/abc100_a
//! oj test -c ./a.out
//! oj t/r -c ./a.out ./judge
//! ```
//!
//! See `oj --help` and `oj COMMAND --help` for details.

use oj_cli::error::ExitStatus;

fn main() {
    match oj_cli::run(std::env::args_os()) {
        Ok(outcome) => std::process::exit(outcome.exit_status().code()),
        Err(err) => {
            if let Some(usage) = err.downcast_ref::<clap::Error>() {
                usage.exit();
            }
            eprintln!("{err:#}");
            std::process::exit(ExitStatus::Failure.code());
        }
    }
}
