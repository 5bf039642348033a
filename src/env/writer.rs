use super::EnvMap;
use crate::error::{Error, Result, WriteTarget};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Renders the mapping as one `KEY=VALUE\n` line per entry.
///
/// Values are written verbatim, without quoting or escaping.
pub fn render(values: &EnvMap) -> String {
    values.iter().map(|(key, value)| format!("{key}={value}\n")).collect()
}

/// Replaces the env file at `path` with the rendered mapping.
///
/// A missing file is created only when its directory accepts new files. Both
/// checks happen before the existing contents are touched. The new contents
/// are staged in a temporary file next to the target and moved over it, so a
/// failed write leaves the previous file as it was.
pub fn save<P: AsRef<Path>>(path: P, values: &EnvMap) -> Result<()> {
    let path = path.as_ref();
    let content = render(values);
    check_writable(path)?;

    replace_with(path, |file| {
        file.write_all(content.as_bytes())?;
        file.flush()
    })?;

    log::debug!("Wrote {} values to {}", values.len(), path.display());
    Ok(())
}

fn check_writable(path: &Path) -> Result<()> {
    if path.exists() {
        return OpenOptions::new().write(true).open(path).map(drop).map_err(|e| {
            log::debug!("Cannot open {} for writing: {e}", path.display());
            Error::NotWritable(WriteTarget::File(path.to_path_buf()))
        });
    }

    OpenOptions::new().write(true).create_new(true).open(path).map(drop).map_err(|e| {
        let dir = parent_dir(path);
        log::debug!("Cannot create {} in {}: {e}", path.display(), dir.display());
        Error::NotWritable(WriteTarget::Directory(dir))
    })
}

/// Writes the file at `path` through `write`, keeping its permissions.
///
/// Falls back to rewriting in place when its directory refuses the staging
/// file, which happens for a writable file in a read-only directory.
fn replace_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let permissions = fs::metadata(&target)?.permissions();

    match NamedTempFile::new_in(parent_dir(&target)) {
        Ok(mut staged) => {
            write(staged.as_file_mut())?;
            staged.as_file().set_permissions(permissions)?;
            staged.persist(&target).map_err(|e| e.error)?;
        }
        Err(e) => {
            log::debug!("Cannot stage a copy of {}, writing in place: {e}", target.display());
            let mut file = OpenOptions::new().write(true).truncate(true).open(&target)?;
            write(&mut file)?;
        }
    }
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
