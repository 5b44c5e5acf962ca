//! Local asset staging.
//!
//! Image references come in two flavors: relative local paths, copied into
//! the output bundle, and external references (`http://`, `https://`,
//! `data:`), preserved verbatim and never fetched or validated.

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::files;

pub(crate) const ASSETS_DIR_NAME: &str = "assets";

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "data:"];

pub(crate) fn is_external(reference: &str) -> bool {
    EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| reference.starts_with(scheme))
}

/// Rewrite every image reference in `config` for the output bundle, copying
/// local files into `<output_dir>/assets/` as a side effect.
pub(crate) fn stage(config: &mut Config, output_dir: &Path) -> Result<()> {
    let root = config.root.clone();
    let assets_dir = output_dir.join(ASSETS_DIR_NAME);

    rewrite(&root, &assets_dir, &mut config.site.logo)?;
    rewrite(&root, &assets_dir, &mut config.hero.image)?;
    if let Some(showcase) = config.showcase.as_mut() {
        for item in &mut showcase.items {
            rewrite(&root, &assets_dir, &mut item.image)?;
        }
    }
    Ok(())
}

fn rewrite(root: &Path, assets_dir: &Path, field: &mut Option<String>) -> Result<()> {
    let Some(reference) = field.as_deref().map(str::trim).filter(|r| !r.is_empty()) else {
        *field = None;
        return Ok(());
    };
    let resolved = resolve(root, assets_dir, reference)?;
    *field = Some(resolved);
    Ok(())
}

fn resolve(root: &Path, assets_dir: &Path, reference: &str) -> Result<String> {
    if is_external(reference) {
        log::trace!("Keeping external reference {reference}");
        return Ok(reference.to_owned());
    }

    let src = root.join(reference);
    if !src.is_file() {
        return Err(Error::Asset { path: src });
    }
    let name = src
        .file_name()
        .expect("regular files have a file name")
        .to_owned();
    let dest = assets_dir.join(&name);
    if dest.exists() {
        log::warn!(
            "Asset name collision: {} overwrites an earlier {}",
            src.display(),
            dest.display()
        );
    }
    files::copy_file(&src, &dest)?;
    Ok(format!("{ASSETS_DIR_NAME}/{}", name.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_schemes() {
        assert!(is_external("https://example.com/logo.png"));
        assert!(is_external("http://example.com/logo.png"));
        assert!(is_external("data:image/svg+xml;base64,xyz"));
        assert!(!is_external("content/assets/logo.svg"));
        assert!(!is_external("httpdocs/logo.png"));
    }

    #[test]
    fn local_reference_is_copied_and_rewritten() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");
        std::fs::create_dir_all(root.join("content/assets")).unwrap();
        std::fs::write(root.join("content/assets/logo.svg"), "<svg/>").unwrap();
        let out = tmp.path().join("out");

        let mut field = Some("content/assets/logo.svg".to_owned());
        rewrite(&root, &out.join(ASSETS_DIR_NAME), &mut field).unwrap();

        assert_eq!(field.as_deref(), Some("assets/logo.svg"));
        assert!(out.join("assets/logo.svg").is_file());
    }

    #[test]
    fn external_reference_is_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");

        let mut field = Some("https://example.com/logo.png".to_owned());
        rewrite(tmp.path(), &out.join(ASSETS_DIR_NAME), &mut field).unwrap();

        assert_eq!(field.as_deref(), Some("https://example.com/logo.png"));
        assert!(!out.exists());
    }

    #[test]
    fn colliding_basenames_overwrite_the_earlier_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");
        std::fs::create_dir_all(root.join("a")).unwrap();
        std::fs::create_dir_all(root.join("b")).unwrap();
        std::fs::write(root.join("a/photo.png"), "first").unwrap();
        std::fs::write(root.join("b/photo.png"), "second").unwrap();
        let assets = tmp.path().join("out").join(ASSETS_DIR_NAME);

        let mut first = Some("a/photo.png".to_owned());
        rewrite(&root, &assets, &mut first).unwrap();
        let mut second = Some("b/photo.png".to_owned());
        rewrite(&root, &assets, &mut second).unwrap();

        // Both references land on the same bundle path; the later copy wins.
        assert_eq!(first, second);
        assert_eq!(
            std::fs::read_to_string(assets.join("photo.png")).unwrap(),
            "second"
        );
    }

    #[test]
    fn missing_local_file_is_an_asset_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");

        let mut field = Some("content/assets/ghost.svg".to_owned());
        let err = rewrite(tmp.path(), &out.join(ASSETS_DIR_NAME), &mut field).unwrap_err();
        assert!(matches!(err, Error::Asset { .. }));
    }

    #[test]
    fn blank_reference_is_cleared() {
        let tmp = tempfile::tempdir().unwrap();
        let mut field = Some("  ".to_owned());
        rewrite(tmp.path(), &tmp.path().join(ASSETS_DIR_NAME), &mut field).unwrap();
        assert_eq!(field, None);
    }
}
