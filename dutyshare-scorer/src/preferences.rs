//! Local preference file.
//!
//! Preferences live in a small JSON document next to the member's other
//! settings:
//!
//! ```json
//! { "preferred_categories": ["kitchen"], "avoided_categories": ["washroom"] }
//! ```
//!
//! Categories the engine does not recognise load as `other`.

use std::io::{self, BufReader, BufWriter, Write};

use camino::Utf8Path;
use dutyshare_core::Preferences;
use dutyshare_fs::{create_utf8_file, ensure_parent_dir, open_utf8_file};

use crate::PreferencesError;

/// Load preferences from `path`.
///
/// Returns `Ok(None)` when the file does not exist; preferences are
/// optional and a missing file is the normal state for a new member.
///
/// # Errors
/// Returns [`PreferencesError`] when the file exists but cannot be read or
/// decoded.
pub fn load_preferences(path: &Utf8Path) -> Result<Option<Preferences>, PreferencesError> {
    let file = match open_utf8_file(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no preference file at {path}");
            return Ok(None);
        }
        Err(source) => {
            return Err(PreferencesError::ReadFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let preferences = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        PreferencesError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(Some(preferences))
}

/// Persist `preferences` to `path` as pretty-printed JSON.
///
/// The parent directory is created when missing and any existing file is
/// replaced.
///
/// # Errors
/// Returns [`PreferencesError`] when the directory or file cannot be
/// created, or the document cannot be written.
pub fn write_preferences(path: &Utf8Path, preferences: &Preferences) -> Result<(), PreferencesError> {
    ensure_parent_dir(path).map_err(|source| PreferencesError::CreateParent {
        path: path
            .parent()
            .map_or_else(|| Utf8Path::new(".").to_path_buf(), Utf8Path::to_path_buf),
        source,
    })?;
    let write_error = |source| PreferencesError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let file = create_utf8_file(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, preferences).map_err(|source| {
        PreferencesError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
