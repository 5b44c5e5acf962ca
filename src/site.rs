//! The build pipeline: one configuration in, one fully regenerated site
//! directory out.

use std::fs;
use std::path::PathBuf;

use crate::assets;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::files;
use crate::render;
use crate::sections;
use crate::template::{Engine, Templates};

/// Render `config` into `sites/<slug>/`.
///
/// The output directory is deleted and recreated first, so two runs over
/// identical input produce byte-identical output and nothing from earlier
/// configurations of the same slug survives.
pub fn generate(config: &Config) -> Result<PathBuf> {
    log::trace!("Build configuration: {config}");

    let slug = config.slug();
    let output_dir = config.output_dir();
    log::info!("Building `{slug}` into {}", output_dir.display());

    files::clean_dir(&output_dir)?;
    let assets_dir = output_dir.join(assets::ASSETS_DIR_NAME);
    fs::create_dir_all(&assets_dir)
        .map_err(|e| Error::io(format!("could not create {}", assets_dir.display()), e))?;

    let templates = Templates::load(&config.root)?;

    let mut resolved = config.clone();
    assets::stage(&mut resolved, &output_dir)?;

    let active = sections::active_sections(&resolved);
    log::debug!("Active sections: {active:?}");

    let engine = Engine::new()?;
    let globals = render::globals(&resolved, &active);
    let index = engine.render("index.html", &templates.layout, &globals)?;
    let style = engine.render("style.css", &templates.style, &globals)?;

    files::write_document_file(index, output_dir.join("index.html"))?;
    files::write_document_file(style, output_dir.join("style.css"))?;

    log::info!("Created {}", output_dir.join("index.html").display());
    Ok(output_dir)
}

/// Remove the output directory for `config`'s slug.
pub fn clean(config: &Config) -> Result<()> {
    let output_dir = config.output_dir();
    let destdir = match output_dir.canonicalize() {
        Ok(destdir) => destdir,
        Err(e) => {
            log::debug!("No {} to clean", output_dir.display());
            log::debug!("{e}");
            return Ok(());
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::new());
    if cwd.starts_with(&destdir) {
        return Err(Error::io(
            format!(
                "attempting to delete current directory ({}), cancelling the operation",
                destdir.display()
            ),
            std::io::Error::other("destination contains the working directory"),
        ));
    }

    fs::remove_dir_all(&destdir)
        .map_err(|e| Error::io(format!("could not remove {}", destdir.display()), e))?;
    log::info!("Removed {}", destdir.display());

    Ok(())
}
