//! Directory creation and best-effort access-mode normalization.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{AppError, InstallLayout, ServiceName};

/// Mode applied to directories: traversable and writable by everyone.
pub const DIR_MODE: u32 = 0o777;
/// Mode applied to regular files: owner-writable, world-readable.
pub const FILE_MODE: u32 = 0o644;

/// An entry whose mode could not be adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Number of entries whose mode was set.
    pub adjusted: usize,
    pub failures: Vec<PermissionFailure>,
}

impl NormalizeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ensure every per-service directory of the enabled services exists.
///
/// Returns the directories that had to be created.
pub fn create_service_directories(
    layout: &InstallLayout,
    enabled: &BTreeSet<ServiceName>,
) -> Result<Vec<PathBuf>, AppError> {
    let mut created = Vec::new();
    for service in enabled {
        for dir in layout.service_directories(*service) {
            if dir.is_dir() {
                continue;
            }
            fs::create_dir_all(&dir)?;
            tracing::debug!(service = %service, dir = %dir.display(), "created service directory");
            created.push(dir);
        }
    }
    Ok(created)
}

/// Apply [`DIR_MODE`] and [`FILE_MODE`] under `path`.
///
/// Failures on single entries are collected and the walk continues. Symbolic
/// links are left alone. With `recursive` unset only `path` itself is touched.
pub fn normalize(path: &Path, recursive: bool) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    let walker = WalkDir::new(path).max_depth(if recursive { usize::MAX } else { 0 });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let failed = err.path().unwrap_or(path).to_path_buf();
                report.failures.push(PermissionFailure { path: failed, reason: err.to_string() });
                continue;
            }
        };
        let file_type = entry.file_type();
        let mode = if file_type.is_dir() {
            DIR_MODE
        } else if file_type.is_file() {
            FILE_MODE
        } else {
            continue;
        };
        match set_mode(entry.path(), mode) {
            Ok(()) => report.adjusted += 1,
            Err(err) => {
                tracing::warn!(path = %entry.path().display(), error = %err, "could not set mode");
                report
                    .failures
                    .push(PermissionFailure { path: entry.into_path(), reason: err.to_string() });
            }
        }
    }

    report
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
