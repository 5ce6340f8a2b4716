use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait FsExt: AsRef<Path> {
    // Resolves the path against the current working directory. Absolute paths are returned as is.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let cwd_dir = std::env::current_dir()?;

        Ok(cwd_dir.join(self))
    }

    // Creates every missing directory above the file so that it can be written to.
    fn create_parent_dirs(&self) -> Result<()> {
        let path = self.as_ref();

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent)),
            _ => Ok(()),
        }
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}

impl FsExt for Path {}
