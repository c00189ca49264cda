//! Directory loading for the file corpus

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::QaConfig;
use crate::error::{DocqaError, Result};

/// Read every recognized text file directly inside `dir`
///
/// Returns file name → content. Subdirectories are not descended into.
pub fn load_files(dir: &Path, config: &QaConfig) -> Result<BTreeMap<String, String>> {
    if !dir.is_dir() {
        let reason = if dir.exists() {
            "not a directory".to_string()
        } else {
            "no such directory".to_string()
        };
        return Err(DocqaError::FileAccess {
            path: dir.to_path_buf(),
            reason,
        });
    }

    let mut files = BTreeMap::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            DocqaError::file_access(path, e)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.accepts_extension(ext));
        if !recognized {
            debug!(path = %path.display(), "skip_unrecognized_extension");
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %path.display(), "skip_non_utf8_file_name");
            continue;
        };

        let content = fs::read_to_string(path).map_err(|e| DocqaError::file_access(path, e))?;
        files.insert(name.to_string(), content);
    }

    debug!(dir = %dir.display(), count = files.len(), "load_files");

    Ok(files)
}
