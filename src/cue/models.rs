// src/cue/models
use crate::cue::error::CueError;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TrackDescriptor {
    pub title: String,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub performer: Option<String>,
}

impl TrackDescriptor {
    /// CUE has no hours field, so hours are folded into the minutes.
    ///
    /// `None` if the folded value does not fit into a `u64`.
    pub fn elapsed_minutes(&self) -> Option<u64> {
        self.hours.checked_mul(60)?.checked_add(self.minutes)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Remark {
    pub key: String,
    pub value: String,
}

impl FromStr for Remark {
    type Err = CueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| CueError::InvalidRemark(s.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(CueError::InvalidRemark(s.to_string()));
        }

        Ok(Self {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

/// Album level data for the cue header.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AlbumMetadata {
    pub performer: String,
    pub title: String,
    /// Audio file name without the extension
    pub filename: String,
    pub extension: String,
    /// Emitted as REM lines in insertion order
    pub remarks: Vec<Remark>,
}

impl AlbumMetadata {
    pub fn new(
        performer: impl Into<String>,
        title: impl Into<String>,
        filename: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            performer: performer.into(),
            title: title.into(),
            filename: filename.into(),
            extension: extension.into(),
            remarks: Vec::new(),
        }
    }

    pub fn with_remark(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.remarks.push(Remark {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_filename(&self, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..self.clone()
        }
    }
}
