use crate::batch::error::{BatchError, BatchResult};
use crate::batch::fs::{cue_path, description_path, file_stem, find_audio_files};
use crate::cue::make_cue;
use crate::cue::models::AlbumMetadata;
use crate::cue::parser::TrackParser;
use futures::StreamExt;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

pub mod error;
pub mod fs;

/// An audio file with its track listing and the cue sheet to write.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CuePair {
    pub audio: PathBuf,
    pub description: PathBuf,
    pub cue: PathBuf,
}

impl CuePair {
    pub fn from_audio(audio: PathBuf) -> Self {
        Self {
            description: description_path(&audio),
            cue: cue_path(&audio),
            audio,
        }
    }
}

#[derive(Debug)]
pub struct BatchOptions<P> {
    /// Template for every sheet, the filename is replaced with each audio stem
    pub album: AlbumMetadata,
    pub parser: P,
    pub force: bool,
    pub jobs: usize,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

pub async fn find_pairs(dir: &Path, ext: &str) -> BatchResult<Vec<CuePair>> {
    let mut pairs = Vec::new();

    for audio in find_audio_files(dir, ext).await? {
        let pair = CuePair::from_audio(audio);

        if tokio::fs::try_exists(&pair.description).await? {
            pairs.push(pair);
        } else {
            debug!("Skipping {:?}, no description found", pair.audio);
        }
    }

    Ok(pairs)
}

/// Reads a track listing, renders it and writes the cue sheet to `output`.
pub async fn write_cue_file(
    description: &Path,
    output: &Path,
    album: &AlbumMetadata,
    parser: &impl TrackParser,
    force: bool,
) -> BatchResult<()> {
    if tokio::fs::try_exists(output).await? && !force {
        return Err(BatchError::CueFileAlreadyExists(output.to_path_buf()));
    }

    debug!("Reading description: {description:?}");
    let input = tokio::fs::read_to_string(description).await?;
    let cue = make_cue(&input, album, parser)?;

    tokio::fs::write(output, cue).await?;

    info!("Generated CUE file: {output:?}");
    Ok(())
}

pub async fn convert_pair(
    pair: &CuePair,
    template: &AlbumMetadata,
    parser: &impl TrackParser,
    force: bool,
) -> BatchResult<()> {
    let mut album = template.with_filename(file_stem(&pair.audio)?);
    // Discovery ignores case, the FILE entry has to name the file as it is on disk
    if let Some(ext) = pair.audio.extension().and_then(|e| e.to_str()) {
        album.extension = ext.to_string();
    }

    write_cue_file(&pair.description, &pair.cue, &album, parser, force).await
}

/// Converts a single track listing.
///
/// `filename` defaults to the description stem, `output` to the description path with a `.cue` extension.
pub async fn generate_cue_file(
    description: &Path,
    output: Option<&Path>,
    filename: Option<&str>,
    template: &AlbumMetadata,
    parser: &impl TrackParser,
    force: bool,
) -> BatchResult<PathBuf> {
    let filename = match filename {
        Some(filename) => filename.to_string(),
        None => file_stem(description)?,
    };
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cue_path(description));

    write_cue_file(
        description,
        &output,
        &template.with_filename(filename),
        parser,
        force,
    )
    .await?;

    Ok(output)
}

/// Converts every audio/description pair below `dir`.
///
/// A failing pair is logged and counted, the remaining pairs are still converted.
pub async fn generate_cue_files<P: TrackParser>(
    progress: MultiProgress,
    dir: &Path,
    options: &BatchOptions<P>,
) -> BatchResult<BatchSummary> {
    let pairs = find_pairs(dir, &options.album.extension).await?;

    if pairs.is_empty() {
        warn!(
            "No .{} files with a matching .txt description found in {dir:?}",
            options.album.extension
        );
        return Ok(BatchSummary::default());
    }

    info!("Found {} album(s) to convert", pairs.len());

    let bar = progress.add(ProgressBar::new(pairs.len() as u64));
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let results: Vec<bool> = futures::stream::iter(pairs)
        .map(|pair| {
            let bar = bar.clone();
            async move {
                let result =
                    convert_pair(&pair, &options.album, &options.parser, options.force).await;
                if let Err(e) = &result {
                    error!("Failed to convert {:?}: {e}", pair.audio);
                }
                bar.inc(1);
                result.is_ok()
            }
        })
        .buffer_unordered(options.jobs.max(1))
        .collect()
        .await;

    bar.finish_and_clear();
    progress.remove(&bar);

    let converted = results.iter().filter(|ok| **ok).count();
    let summary = BatchSummary {
        converted,
        failed: results.len() - converted,
    };

    info!(
        "Done! Converted {} album(s), {} failed",
        summary.converted, summary.failed
    );

    Ok(summary)
}
