// Filesystem access for texts and signature files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::error::AttributionError;
use crate::features::signature::Signature;

use super::record::{format_signature, parse_signature};

/// Check that a user-supplied path exists.
///
/// The interactive driver calls this in a loop, re-prompting until it
/// gets a path that does.
pub fn validate_path(path: impl AsRef<Path>) -> Result<PathBuf, AttributionError> {
    let path = path.as_ref();
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(AttributionError::PathNotFound(path.to_path_buf()))
    }
}

/// Read a text file as a list of lines, each keeping its line ending.
///
/// Concatenating the result reproduces the file exactly.
pub fn read_text(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read text file {}", path.display()))?;
    Ok(split_lines(&contents))
}

fn split_lines(contents: &str) -> Vec<String> {
    contents.split_inclusive('\n').map(str::to_string).collect()
}

/// Read one signature file.
pub fn read_signature(path: &Path) -> Result<Signature> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read signature file {}", path.display()))?;
    let signature = parse_signature(&contents)
        .with_context(|| format!("invalid signature file {}", path.display()))?;
    Ok(signature)
}

/// Write a signature file in the record format.
pub fn write_signature(path: &Path, signature: &Signature) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let record = format_signature(signature)
        .with_context(|| format!("cannot write signature to {}", path.display()))?;
    fs::write(path, record)
        .with_context(|| format!("failed to write signature file {}", path.display()))?;
    info!(path = %path.display(), label = %signature.label, "Wrote signature");
    Ok(())
}

/// Load every signature file in a directory.
///
/// Every regular, non-hidden file (or symlink to one) is expected to be a
/// signature. Files are
/// read in file-name order so tie-breaking in the matcher is reproducible.
/// One malformed file fails the whole load.
pub fn load_directory(dir: &Path) -> Result<Vec<Signature>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list signature directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            debug!(path = %path.display(), "Skipping hidden entry");
            continue;
        }
        // fs::metadata follows symlinks; DirEntry::file_type does not
        let is_file = fs::metadata(&path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .is_file();
        if !is_file {
            warn!(path = %path.display(), "Skipping non-file entry in signature directory");
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let signatures = paths
        .iter()
        .map(|p| read_signature(p))
        .collect::<Result<Vec<_>>>()?;

    info!(
        dir = %dir.display(),
        count = signatures.len(),
        "Loaded signature directory"
    );
    Ok(signatures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_endings() {
        let lines = split_lines("one.\ntwo\n\nthree");
        assert_eq!(lines, vec!["one.\n", "two\n", "\n", "three"]);
        assert_eq!(lines.concat(), "one.\ntwo\n\nthree");
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_validate_missing_path() {
        let result = validate_path("/definitely/not/a/real/path/penprint");
        assert!(matches!(result, Err(AttributionError::PathNotFound(_))));
    }
}
