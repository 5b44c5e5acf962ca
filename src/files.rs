use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("could not read {}", path.display()), e))
}

pub(crate) fn copy_file(src_file: &Path, dest_file: &Path) -> Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("could not create {}", parent.display()), e))?;
    }

    log::debug!(
        "Copying {} to {}",
        src_file.display(),
        dest_file.display()
    );
    fs::copy(src_file, dest_file).map_err(|e| {
        Error::io(
            format!(
                "could not copy {} into {}",
                src_file.display(),
                dest_file.display()
            ),
            e,
        )
    })?;
    Ok(())
}

pub(crate) fn write_document_file<S: AsRef<str>, P: AsRef<Path>>(
    content: S,
    dest_file: P,
) -> Result<()> {
    write_document_file_internal(content.as_ref(), dest_file.as_ref())
}

fn write_document_file_internal(content: &str, dest_file: &Path) -> Result<()> {
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("could not create {}", parent.display()), e))?;
    }

    let mut file = fs::File::create(dest_file)
        .map_err(|e| Error::io(format!("could not create {}", dest_file.display()), e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(format!("could not write {}", dest_file.display()), e))?;
    log::trace!("Wrote {}", dest_file.display());
    Ok(())
}

/// Recursively delete `dir` if present, then recreate it empty.
///
/// Guarantees a clean, reproducible build: no stale files from earlier
/// configurations of the same slug survive.
pub(crate) fn clean_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        log::debug!("Removing stale output {}", dir.display());
        fs::remove_dir_all(dir)
            .map_err(|e| Error::io(format!("could not remove {}", dir.display()), e))?;
    }
    fs::create_dir_all(dir)
        .map_err(|e| Error::io(format!("could not create {}", dir.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_dir_removes_previous_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/stale.txt"), "old").unwrap();

        clean_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn clean_dir_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("fresh/out");
        clean_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn copy_file_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "payload").unwrap();

        let dest = tmp.path().join("deep/down/a.txt");
        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
    }
}
