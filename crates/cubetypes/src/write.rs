//! Generated artifact writing.

use std::io;
use std::path::Path;

/// Write UTF-8 content, creating parent directories as needed.
pub fn write_generated_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
}
