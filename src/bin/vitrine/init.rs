use std::path::PathBuf;

/// Scaffold a new project with a sample configuration and templates
#[derive(Clone, Debug, clap::Args)]
pub struct InitArgs {
    #[arg(value_name = "DIRECTORY", default_value = "./")]
    pub directory: PathBuf,
}

impl InitArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        vitrine::new::create_new_project(&self.directory)?;
        log::info!("Created project in {}", self.directory.display());
        Ok(())
    }
}
