//! Export boundary: wrap the compiled page into one downloadable artifact.
//!
//! Snapshot-and-wrap only; the document model is not consulted here. The
//! filename is fixed and derived from the product, never from document
//! content.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Deterministic artifact name, one per invocation.
pub const ARTIFACT_FILE_NAME: &str = "landing-page.html";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the compiled page into `out_dir` under the fixed artifact name.
/// Returns the artifact path.
pub fn write_artifact(html: &str, out_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(ARTIFACT_FILE_NAME);

    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, html).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_compiler_html::{compile_to_html, CompileOptions};
    use pagecraft_model::seed;

    #[test]
    fn test_artifact_has_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact("<!DOCTYPE html>", dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), ARTIFACT_FILE_NAME);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_export_creates_missing_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dist");
        let path = write_artifact("x", &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_compiled_seed_round_trips_to_disk() {
        let html = compile_to_html(&seed::default_document(), CompileOptions::default()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&html, dir.path()).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, html);
        assert!(on_disk.contains("<!DOCTYPE html>"));
    }
}
