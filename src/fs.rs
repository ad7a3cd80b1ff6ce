use std::path::Path;

use crate::Error;

/// Writes `contents` to `path`, creating its parent directory if it does not exist.
pub fn put(path: &Path, contents: &[u8]) -> Result<(), Error> {
    let name = || path.display().to_string();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| Error::io(name(), e))?;
    }
    std::fs::write(path, contents).map_err(|e| Error::io(name(), e))?;
    log::info!("{} - written ({} bytes)", path.display(), contents.len());
    Ok(())
}
