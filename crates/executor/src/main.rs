pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod pipeline;
pub mod producer;
pub mod sweep;
pub mod types;
pub mod writer;

use log::error;
use std::env;
use std::io;

use error::Error;
use types::RunMode;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (config, mode) = menu::startup(
        &args,
        config::load_config,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    match mode {
        RunMode::Sweep => {
            let path = pipeline::run_sweep(&config).await?;
            println!("Results written to {}", path.display());
            Ok(())
        }
        RunMode::SingleGraph {
            vertices,
            density,
            solve,
        } => {
            let report = pipeline::single_graph_report(&config, vertices, density, solve)?;
            println!("{}", report);
            Ok(())
        }
        RunMode::Interactive => Err(Error::InvalidArguments(
            "no run mode selected".to_string(),
        )),
    }
}
