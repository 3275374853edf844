mod cli;
mod executor;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::{debug, error};
use thiserror::Error;

use noip_updater::{
    config::{Config, ConfigError},
    ipv4source::InterfaceSource,
    provider::{NoipProvider, NoipProviderConfig, ProviderError},
};

use cli::Cli;
use executor::{Executor, ExecutorError};

#[derive(Error, Debug)]
enum RunError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Provider(#[from] ProviderError),
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new().filter_level(cli.loglevel.into()).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let cfg = Config::load(&cli.config)?;
    cfg.validate()?;
    debug!(
        "Updating {} with the address of interface {}",
        cfg.hostname, cfg.interface
    );

    let source = InterfaceSource::create(&cfg.interface);
    let provider = NoipProvider::from_config(&NoipProviderConfig {
        username: &cfg.username,
        password: &cfg.password,
        endpoint: None,
    })?;

    Executor::new(source.as_ref(), provider.as_ref(), &cfg.hostname).run()?;
    Ok(())
}
