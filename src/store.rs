use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PitboardError, PitboardResult};
use crate::roster::{read_roster, write_roster, Roster};

/// Loads and parses the roster file. A missing or unreadable file is fatal
/// to the run; malformed content is not (bad lines parse to nothing).
pub fn load_roster(path: &Path) -> PitboardResult<Roster> {
    let text = fs::read_to_string(path)
        .map_err(|e| PitboardError::file_io(path.to_string_lossy().to_string(), e))?;
    Ok(read_roster(&text))
}

/// Backup file kept alongside the roster: `<stem>_backup.<ext>`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = match path.file_stem() {
        Some(stem) => format!("{}_backup", stem.to_string_lossy()),
        None => "roster_backup".to_string(),
    };
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// Serializes the roster and replaces the file, copying the previous version
/// to its backup path first. The output text is generated in full before
/// anything on disk is touched; there is no partial write.
///
/// Returns the backup path when one was written.
pub fn save_roster(
    path: &Path,
    roster: &Roster,
    keep_backup: bool,
) -> PitboardResult<Option<PathBuf>> {
    let text = write_roster(roster);

    let backup = if keep_backup && path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)
            .map_err(|e| PitboardError::file_io(backup.to_string_lossy().to_string(), e))?;
        info!("📂 Previous roster backed up to {:?}", backup);
        Some(backup)
    } else {
        None
    };

    fs::write(path, text)
        .map_err(|e| PitboardError::file_io(path.to_string_lossy().to_string(), e))?;
    info!("💾 Roster written to {:?}", path);

    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Record;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let result = load_roster(&temp_dir.path().join("nope.txt"));
        assert!(matches!(result, Err(PitboardError::FileIo { .. })));
    }

    #[test]
    fn test_backup_path_keeps_extension() {
        assert_eq!(
            backup_path(Path::new("/data/roster.txt")),
            PathBuf::from("/data/roster_backup.txt")
        );
        assert_eq!(
            backup_path(Path::new("roster")),
            PathBuf::from("roster_backup")
        );
    }

    #[test]
    fn test_first_save_writes_without_backup() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("roster.txt");

        let roster = Roster {
            c1: vec![Record::new(5, 0, "张三")],
            c2: vec![],
        };
        let backup = save_roster(&path, &roster, true).unwrap();

        assert!(backup.is_none());
        assert_eq!(load_roster(&path).unwrap(), roster);
    }

    #[test]
    fn test_save_over_existing_file_keeps_backup() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("roster.txt");
        fs::write(&path, "C1\n5 0\n").unwrap();

        let roster = Roster {
            c1: vec![Record::new(9, 1, "")],
            c2: vec![],
        };
        let backup = save_roster(&path, &roster, true).unwrap().unwrap();

        assert_eq!(backup, temp_dir.path().join("roster_backup.txt"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "C1\n5 0\n");
        assert_eq!(load_roster(&path).unwrap(), roster);
    }

    #[test]
    fn test_backup_can_be_disabled() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("roster.txt");
        fs::write(&path, "C1\n5 0\n").unwrap();

        let backup = save_roster(&path, &Roster::default(), false).unwrap();

        assert!(backup.is_none());
        assert!(!temp_dir.path().join("roster_backup.txt").exists());
    }
}
