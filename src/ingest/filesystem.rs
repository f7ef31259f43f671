use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every regular file under `root`, in sorted path order. Directories named in
/// `skip_dirs` are not descended into (the root itself is always walked).
pub fn list_files(root: &Path, skip_dirs: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !skip_dirs.iter().any(|skip| name == *skip)
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    files
}

pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
