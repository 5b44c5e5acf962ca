use std::path::PathBuf;

use crate::build;
use crate::init;

/// Generate static demo landing pages from JSON configurations.
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "vitrine", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    Build(build::BuildArgs),
    Clean(build::CleanArgs),
    Init(init::InitArgs),
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Command::Build(cmd) => cmd.run(),
            Command::Clean(cmd) => cmd.run(),
            Command::Init(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the site configuration JSON
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory the site directory is created under [default: sites/ next to the config]
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load_config(&self) -> anyhow::Result<vitrine::Config> {
        let mut config = vitrine::Config::from_file(&self.config)?;
        config.abs_dest = self.destination.clone();
        Ok(config)
    }
}
