use std::path::Path;

/// Free space required before a download is considered safe to start.
pub const REQUIRED_SPACE_GB: f64 = 5.0;

const BYTES_PER_GB: f64 = 1_073_741_824.0;

#[derive(Debug, Clone, Copy)]
pub struct SpaceCheck {
    pub available_gb: f64,
    pub sufficient: bool,
}

/// Threshold predicate over raw byte counts.
pub fn sufficient(available_bytes: u64) -> bool {
    available_bytes as f64 / BYTES_PER_GB >= REQUIRED_SPACE_GB
}

/// Query free space for `path` and compare against [`REQUIRED_SPACE_GB`].
///
/// The check is advisory: a failed OS query logs a warning and returns
/// `None`, and callers proceed either way.
pub fn check(path: &Path) -> Option<SpaceCheck> {
    match fs2::available_space(path) {
        Ok(bytes) => Some(SpaceCheck {
            available_gb: bytes as f64 / BYTES_PER_GB,
            sufficient: sufficient(bytes),
        }),
        Err(e) => {
            tracing::warn!("Could not query free space for {}: {}", path.display(), e);
            None
        }
    }
}
