use crate::unit::models::Unit;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const INCLUDE_SUBDIR: &str = "include";

/// Computes where a unit's generated files go and makes sure the
/// destination directory exists.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    base_dir: PathBuf,
}

impl OutputLayout {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn header_path(&self, unit: &Unit) -> Result<PathBuf, io::Error> {
        self.resolve(unit, "hpp")
    }

    pub fn source_path(&self, unit: &Unit) -> Result<PathBuf, io::Error> {
        self.resolve(unit, "cpp")
    }

    // An explicit out_dir takes both files flat; otherwise files land under
    // <base_dir>/<namespace>/include/
    fn unit_dir(&self, unit: &Unit) -> PathBuf {
        match &unit.out_dir {
            Some(dir) => dir.clone(),
            None => self.base_dir.join(&unit.namespace).join(INCLUDE_SUBDIR),
        }
    }

    fn resolve(&self, unit: &Unit, extension: &str) -> Result<PathBuf, io::Error> {
        let dir = self.unit_dir(unit);
        fs::create_dir_all(&dir)?;
        Ok(dir.join(format!("{}.{}", unit.name, extension)))
    }
}
