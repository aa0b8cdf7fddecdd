use crate::cue::error::CueResult;
use crate::cue::models::{AlbumMetadata, Remark};
use crate::cue::parser::{DEFAULT_TRACK_PATTERN, RegexTrackParser};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Album metadata and track line grammar shared by all cue commands
#[derive(Args, Debug, Clone)]
pub struct CueOptions {
    /// Album performer written to the sheet header
    #[arg(long, short = 'p', default_value = "Performer Name")]
    pub performer: String,

    /// Album title written to the sheet header
    #[arg(long, short = 'a', default_value = "Album Name")]
    pub album: String,

    /// Extension of your audio file
    #[arg(long, short = 'e', default_value = "m4a")]
    pub ext: String,

    /// Remark written as a REM line, can be given multiple times
    #[arg(long = "rem", short = 'r', value_name = "KEY=VALUE")]
    pub remarks: Vec<Remark>,

    #[arg(
        long,
        value_name = "REGEX",
        help = "custom track line grammar using the named groups hours, minutes, seconds, title and performer",
        default_value = DEFAULT_TRACK_PATTERN
    )]
    pub pattern: String,

    #[arg(
        long,
        short = 'P',
        help = "writes a PERFORMER line per track from the performer group of --pattern",
        default_value = "false"
    )]
    pub track_performer: bool,

    /// Force overwrite of existing cue files
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,
}

impl CueOptions {
    pub fn parser(&self) -> CueResult<RegexTrackParser> {
        RegexTrackParser::new(&self.pattern, self.track_performer)
    }

    pub fn album(&self, filename: impl Into<String>) -> AlbumMetadata {
        self.remarks.iter().fold(
            AlbumMetadata::new(&self.performer, &self.album, filename, &self.ext),
            |album, remark| album.with_remark(&remark.key, &remark.value),
        )
    }
}

/// Generates a cue sheet from a single track listing
#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    /// Text file with one "[hh:]mm:ss Title" line per track
    #[arg(value_name = "DESCRIPTION")]
    pub description: PathBuf,

    /// Output cue file path, defaults to the description path with .cue extension
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Audio file name without extension, defaults to the description file name
    #[arg(long)]
    pub filename: Option<String>,

    #[command(flatten)]
    pub options: CueOptions,
}

/// Generates cue sheets for every audio file with a matching .txt description
#[derive(Parser, Debug, Clone)]
#[command(
    long_about = "Generates cue sheets for every audio file with a matching .txt description\n\nThe directory is searched recursively, each <name>.txt next to a <name>.<ext> audio file is converted to <name>.cue"
)]
pub struct BatchCommand {
    /// Directory to search for audio files
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Number of albums converted concurrently
    #[arg(long, short = 'j', default_value_t = 4)]
    pub jobs: usize,

    #[command(flatten)]
    pub options: CueOptions,
}
