use crate::batch::error::{BatchError, BatchResult};
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;

#[async_recursion]
pub async fn get_all_files(dir_path: &Path) -> BatchResult<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();

        if path.is_dir() {
            files.append(&mut get_all_files(&path).await?);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

/// Recursively collects every file below `dir_path` with the given extension, sorted by path.
pub async fn find_audio_files(dir_path: &Path, ext: &str) -> BatchResult<Vec<PathBuf>> {
    if !fs::metadata(dir_path).await?.is_dir() {
        return Err(BatchError::NotADirectory(dir_path.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = get_all_files(dir_path)
        .await?
        .into_iter()
        .filter(|file| {
            file.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext))
        })
        .collect();

    files.sort();

    Ok(files)
}

pub fn file_stem(path: &Path) -> BatchResult<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| BatchError::InvalidFileName(path.to_path_buf()))
}

/// The track listing that belongs to an audio file, `<stem>.txt` next to it.
pub fn description_path(audio_path: &Path) -> PathBuf {
    audio_path.with_extension("txt")
}

pub fn cue_path(audio_path: &Path) -> PathBuf {
    audio_path.with_extension("cue")
}
