use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{FguessError, Result};

/// Discovered samples, one entry per class folder. Ordered so training and
/// artifact output are stable across runs.
pub type ClassSamples = BTreeMap<String, Vec<String>>;

/// Walk the immediate subdirectories of `root`; each one becomes a class
/// whose samples are the regular files directly inside it. Samples are
/// decoded lossily, so binary formats still contribute their ASCII runs.
pub fn discover_samples(root: &Path) -> Result<ClassSamples> {
    if !root.is_dir() {
        return Err(FguessError::Discovery(format!(
            "Sample directory does not exist: {}",
            root.display()
        )));
    }

    let mut classes = ClassSamples::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let mut texts = Vec::new();
        for file in fs::read_dir(entry.path())? {
            let file = file?;
            if !file.file_type()?.is_file() {
                continue;
            }
            let bytes = fs::read(file.path())?;
            texts.push(String::from_utf8_lossy(&bytes).into_owned());
        }
        classes.insert(name, texts);
    }

    if classes.is_empty() {
        return Err(FguessError::Discovery(format!(
            "No class folders found under {}",
            root.display()
        )));
    }
    Ok(classes)
}
