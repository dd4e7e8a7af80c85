use std::io;

use log::info;
use structopt::StructOpt;

pub mod eye;
pub mod matrix;
pub mod pipeline;
pub mod scenario;

use scenario::Scenario;

/// Homogeneous-coordinate projection & viewport transforms.
#[derive(StructOpt)]
#[structopt(
    name = "mtx_proj",
    after_help = "Eye coordinates are read from stdin, one `x y z` per line:\n    \
                  cat coords.txt | mtx_proj proj-times-scale"
)]
struct Args {
    /// The question to answer; `window` if omitted.
    #[structopt(subcommand)]
    scenario: Option<Scenario>,
}

pub fn main() -> anyhow::Result<()> {
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::from_args();
    info!("mtx_proj started.");

    let scenario = args.scenario.unwrap_or_default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    scenario.run(stdin.lock(), &mut out)
}
