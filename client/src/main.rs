mod cli;
mod play;
mod ugi;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::{get_env_u64, get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use uct::UCTOptions;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(play_args) => {
            let options = load_options(&play_args.config, "play")?;
            play::play_game(&options, play_args.record.as_deref())?;
        }
        Commands::Ugi(ugi_args) => {
            let options = load_options(&ugi_args.config, "ugi")?;

            let mut runtime = tokio::runtime::Builder::new_multi_thread();
            runtime.enable_all();

            if let Some(worker_threads) = get_env_usize("TOKIO_THREADS")? {
                runtime.worker_threads(worker_threads);
            }

            runtime.build()?.block_on(ugi::run_ugi(options))?;
        }
    }

    Ok(())
}

/// Reads the UCT options from the scope of the config file. A missing file falls back to the
/// defaults. `UCT_SEED` and `UCT_MAX_ITERATIONS` override what the file says.
fn load_options(config: &str, scope: &str) -> Result<UCTOptions> {
    let config_path = config.relative_to_cwd()?;

    let mut options: UCTOptions = if config_path.is_file() {
        ConfigLoader::new(&config_path, scope.to_string())?.load()?
    } else {
        info!("No config found at {:?}, using defaults", config_path);
        UCTOptions::default()
    };

    if let Some(seed) = get_env_u64("UCT_SEED")? {
        options.seed = Some(seed);
    }

    if let Some(max_iterations) = get_env_usize("UCT_MAX_ITERATIONS")? {
        options.max_iterations = Some(max_iterations);
    }

    info!("{:?}", options);

    Ok(options)
}
