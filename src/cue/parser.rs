use crate::cue::error::{CueError, CueResult, TimestampOutOfRange};
use crate::cue::models::TrackDescriptor;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::num::IntErrorKind;

pub const DEFAULT_TRACK_PATTERN: &str =
    r"^\[?(?:(?P<hours>[0-9]{1,2}):)?(?P<minutes>[0-9]{1,2}):(?P<seconds>[0-9]{1,2})\]? (?P<title>.*)";

const REQUIRED_GROUPS: [&str; 3] = ["minutes", "seconds", "title"];

lazy_static! {
    static ref DEFAULT_TRACK_RE: Regex = Regex::new(DEFAULT_TRACK_PATTERN).unwrap();
}

/// Turns a single description line into a track.
///
/// Returns `Ok(None)` if the line is not a track line, the caller decides how to report it.
pub trait TrackParser {
    fn parse_line(&self, line: &str) -> Result<Option<TrackDescriptor>, TimestampOutOfRange>;
}

/// Track parser driven by a regex with named capture groups.
///
/// `minutes`, `seconds` and `title` are required, `hours` is optional and defaults to 0.
/// A `performer` group is only read when per-track performers are enabled.
/// Matches must start at the beginning of the line, whether or not the pattern has a `^`.
/// Numeric groups must capture ASCII digits, anything else makes the line malformed.
#[derive(Debug, Clone)]
pub struct RegexTrackParser {
    regex: Regex,
    track_performer: bool,
}

impl RegexTrackParser {
    pub fn new(pattern: &str, track_performer: bool) -> CueResult<Self> {
        let regex = Regex::new(pattern)?;
        Self::from_regex(regex, track_performer)
    }

    pub fn from_regex(regex: Regex, track_performer: bool) -> CueResult<Self> {
        let has_group = |name: &str| regex.capture_names().flatten().any(|n| n == name);

        if let Some(missing) = REQUIRED_GROUPS.into_iter().find(|name| !has_group(name)) {
            return Err(CueError::MissingCaptureGroup(missing));
        }

        if track_performer && !has_group("performer") {
            return Err(CueError::MissingCaptureGroup("performer"));
        }

        Ok(Self {
            regex,
            track_performer,
        })
    }

    fn number(captures: &Captures, name: &str) -> Result<Option<u64>, TimestampOutOfRange> {
        let Some(value) = captures.name(name) else {
            return Ok(None);
        };

        match value.as_str().parse() {
            Ok(number) => Ok(Some(number)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(TimestampOutOfRange(value.as_str().to_string()))
            }
            Err(_) => Ok(None),
        }
    }
}

impl Default for RegexTrackParser {
    fn default() -> Self {
        Self {
            regex: DEFAULT_TRACK_RE.clone(),
            track_performer: false,
        }
    }
}

impl TrackParser for RegexTrackParser {
    fn parse_line(&self, line: &str) -> Result<Option<TrackDescriptor>, TimestampOutOfRange> {
        // Leftmost match, so a match anywhere but 0 means nothing matched at the line start
        let Some(captures) = self.regex.captures(line.trim()) else {
            return Ok(None);
        };
        if captures.get(0).is_some_and(|m| m.start() != 0) {
            return Ok(None);
        }

        let hours = if captures.name("hours").is_some() {
            match Self::number(&captures, "hours")? {
                Some(hours) => hours,
                None => return Ok(None),
            }
        } else {
            0
        };

        let (Some(minutes), Some(seconds), Some(title)) = (
            Self::number(&captures, "minutes")?,
            Self::number(&captures, "seconds")?,
            captures.name("title"),
        ) else {
            return Ok(None);
        };

        let performer = if self.track_performer {
            captures.name("performer").map(|m| m.as_str().to_string())
        } else {
            None
        };

        Ok(Some(TrackDescriptor {
            title: title.as_str().to_string(),
            hours,
            minutes,
            seconds,
            performer,
        }))
    }
}
