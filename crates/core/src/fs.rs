//! Filesystem checks

use std::path::Path;

use log::debug;

/// Check if a path points at a regular file
pub fn is_file(path: &str) -> bool {
    let found = Path::new(path).is_file();
    if !found {
        debug!("No regular file at: {}", path);
    }
    found
}
