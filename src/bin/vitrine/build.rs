use crate::args;

/// Build the site described by a configuration file
#[derive(Clone, Debug, clap::Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: args::ConfigArgs,
}

impl BuildArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config.load_config()?;
        let output_dir = vitrine::generate(&config)?;
        log::info!("Site generated in {}", output_dir.display());
        Ok(())
    }
}

/// Remove the output directory for a configuration's slug
#[derive(Clone, Debug, clap::Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub config: args::ConfigArgs,
}

impl CleanArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config.load_config()?;
        vitrine::clean(&config)?;
        Ok(())
    }
}
