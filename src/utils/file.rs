use std::fs;
use std::path::{Path, PathBuf};

/// Files directly inside `dir` with the given extension, sorted by name.
pub fn list_files_with_extension(dir: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
    let mut entries = Vec::new();

    if let Ok(read_dir) = fs::read_dir(dir.as_ref()) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }
            entries.push(path);
        }
    }

    entries.sort();
    entries
}

pub fn list_png_files(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    list_files_with_extension(dir, "png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_matching_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("knight.png"), b"").expect("write");
        fs::write(dir.path().join("archers.png"), b"").expect("write");
        fs::write(dir.path().join("notes.txt"), b"").expect("write");
        fs::create_dir(dir.path().join("nested.png")).expect("mkdir");

        let names: Vec<_> = list_png_files(dir.path())
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["archers.png", "knight.png"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(list_png_files(dir.path().join("absent")).is_empty());
    }
}
