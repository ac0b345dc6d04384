//! `mappath MAPFILE X0 Y0 X1 Y1 [INTERVAL]`
//!
//! Prints the lowest-cost path from (X0, Y0) to (X1, Y1), or animates the
//! search when INTERVAL (microseconds per frame) is non-zero.

use std::io::Write;

use clap::Parser;
use mappath::{run, Args, RunConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let config = RunConfig::from(Args::parse());
    let stdout = std::io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
