use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::template;

const SITE_JSON: &str = r##"{
  "site": {
    "name": "Sua Empresa",
    "tagline": "Sites profissionais para pequenos negócios",
    "primary_color": "#1b6ef3",
    "accent_color": "#f97316"
  },
  "hero": {
    "subheadline": "Uma página de demonstração gerada a partir deste arquivo.",
    "primary_cta": { "text": "Fale conosco", "link": "https://wa.me/5500000000000" }
  },
  "about": {
    "title": "Sobre",
    "text": "Apresente aqui a história do negócio.\n\nCada parágrafo é separado por uma linha em branco.",
    "highlights": ["Atendimento rápido", "Orçamento sem compromisso"]
  },
  "services": {
    "title": "Serviços",
    "items": [
      { "name": "Serviço um", "description": "Descreva o serviço oferecido." },
      { "name": "Serviço dois", "description": "Descreva outro serviço." }
    ]
  },
  "contact": {
    "whatsapp": "5500000000000",
    "email": "contato@suaempresa.com.br"
  }
}
"##;

/// Scaffold a starter project: sample configuration, the shared template
/// pair, and an empty asset source directory.
pub fn create_new_project<P: AsRef<Path>>(dest: P) -> Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &Path) -> Result<()> {
    create_dirs(dest)?;
    create_file(&dest.join("site.json"), SITE_JSON)?;

    create_dirs(&dest.join("templates/base"))?;
    create_file(
        &dest.join("templates/base/index.liquid"),
        template::DEFAULT_LAYOUT,
    )?;
    create_file(
        &dest.join("templates/base/style.css"),
        template::DEFAULT_STYLE,
    )?;

    create_dirs(&dest.join("content/assets"))?;

    Ok(())
}

fn create_dirs(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::io(format!("could not create {}", path.display()), e))
}

fn create_file(path: &Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(format!("failed to create file {}", path.display()), e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))?;

    Ok(())
}
