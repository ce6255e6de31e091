use std::path::Path;
use std::process::Command;

use log::debug;

use crate::utils::error::TilError;

/// Open `path` in `editor` and wait for it to exit
pub fn open_in_editor(editor: &str, path: &Path) -> Result<(), TilError> {
    debug!("Opening {} with {}", path.display(), editor);

    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| TilError::Editor(format!("could not launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(TilError::Editor(format!("'{}' exited with {}", editor, status)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_editor() {
        let result = open_in_editor("til-editor-that-does-not-exist", Path::new("page.md"));

        assert!(matches!(result, Err(TilError::Editor(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_exit_status() {
        assert!(open_in_editor("true", Path::new("page.md")).is_ok());
        assert!(matches!(open_in_editor("false", Path::new("page.md")), Err(TilError::Editor(_))));
    }
}
