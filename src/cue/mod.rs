use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{AlbumMetadata, TrackDescriptor};
use crate::cue::parser::TrackParser;
use log::debug;

pub mod error;
pub mod models;
pub mod parser;

pub const MAX_TRACKS: usize = 999;

/// Left pads the decimal representation of `number` with zeros up to `length` digits.
pub fn pad_number(number: impl ToString, length: usize) -> String {
    format!("{:0>length$}", number.to_string())
}

pub fn pad(number: impl ToString) -> String {
    pad_number(number, 2)
}

/// Builds a complete cue sheet from a track listing.
///
/// Fails on the first malformed line, there is never a partial document.
pub fn make_cue(
    input: &str,
    album: &AlbumMetadata,
    parser: &impl TrackParser,
) -> CueResult<String> {
    let tracks = make_cue_tracks(input, parser)?;

    let mut output = String::new();
    output.push_str(&format!("PERFORMER \"{}\"\n", album.performer));
    output.push_str(&format!("TITLE \"{}\"\n", album.title));

    for remark in &album.remarks {
        output.push_str(&format!("REM {remark}\n"));
    }

    output.push_str(&format!(
        "FILE \"{}.{}\" WAVE\n",
        album.filename, album.extension
    ));
    output.push_str(&tracks);

    Ok(output)
}

/// Renders one TRACK block per line of `input`.
pub fn make_cue_tracks(input: &str, parser: &impl TrackParser) -> CueResult<String> {
    let lines: Vec<&str> = input.trim_matches('\n').split('\n').collect();
    if lines.len() > MAX_TRACKS {
        return Err(CueError::TooManyTracks(lines.len()));
    }

    debug!("Parsing {} track lines", lines.len());

    let mut output = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.trim();
        let line_number = index + 1;
        let out_of_range = || CueError::TimestampOutOfRange {
            line_number,
            content: line.to_string(),
        };

        let track = parser
            .parse_line(line)
            .map_err(|_| out_of_range())?
            .ok_or_else(|| CueError::MalformedLine {
                line_number,
                content: line.to_string(),
            })?;
        let elapsed_minutes = track.elapsed_minutes().ok_or_else(out_of_range)?;

        write_track(&mut output, line_number, elapsed_minutes, &track);
    }

    Ok(output)
}

fn write_track(output: &mut String, number: usize, elapsed_minutes: u64, track: &TrackDescriptor) {
    output.push_str(&format!("    TRACK {} AUDIO\n", pad(number)));
    output.push_str(&format!("        TITLE \"{}\"\n", track.title));
    if let Some(performer) = &track.performer {
        output.push_str(&format!("        PERFORMER {performer}\n"));
    }
    output.push_str(&format!(
        "        INDEX 01 {}:{}:00\n",
        pad(elapsed_minutes),
        pad(track.seconds)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::parser::RegexTrackParser;

    fn album() -> AlbumMetadata {
        AlbumMetadata::new("Artist", "Record", "disc1", "wav")
    }

    #[test]
    fn pad_number_pads_to_length() {
        assert_eq!(pad(1), "01");
        assert_eq!(pad(12), "12");
        assert_eq!(pad(0), "00");
        assert_eq!(pad_number(7, 3), "007");
    }

    #[test]
    fn pad_number_leaves_long_numbers_unchanged() {
        assert_eq!(pad(123), "123");
        assert_eq!(pad_number(4567, 2), "4567");
        assert_eq!(pad_number(5, 1), "5");
    }

    #[test]
    fn make_cue_renders_full_document() {
        let cue = make_cue(
            "0:00 First\n3:45 Second",
            &album(),
            &RegexTrackParser::default(),
        )
        .unwrap();

        let expected = "PERFORMER \"Artist\"\n\
                        TITLE \"Record\"\n\
                        FILE \"disc1.wav\" WAVE\n    \
                        TRACK 01 AUDIO\n        \
                        TITLE \"First\"\n        \
                        INDEX 01 00:00:00\n    \
                        TRACK 02 AUDIO\n        \
                        TITLE \"Second\"\n        \
                        INDEX 01 03:45:00\n";

        assert_eq!(cue, expected);
    }

    #[test]
    fn make_cue_emits_remarks_in_order() {
        let album = album()
            .with_remark("GENRE", "Rock")
            .with_remark("DATE", "1999");

        let cue = make_cue("0:00 First\n", &album, &RegexTrackParser::default()).unwrap();
        let lines: Vec<&str> = cue.lines().collect();

        assert_eq!(lines[2], "REM GENRE Rock");
        assert_eq!(lines[3], "REM DATE 1999");
        assert_eq!(lines[4], "FILE \"disc1.wav\" WAVE");
    }

    #[test]
    fn index_defaults_hours_to_zero() {
        let tracks = make_cue_tracks("1:05 Intro", &RegexTrackParser::default()).unwrap();
        assert!(tracks.contains("INDEX 01 01:05:00"));
    }

    #[test]
    fn index_folds_hours_into_minutes() {
        let tracks =
            make_cue_tracks("[01:02:03] Long Track", &RegexTrackParser::default()).unwrap();
        assert!(tracks.contains("TITLE \"Long Track\""));
        assert!(tracks.contains("INDEX 01 62:03:00"));
    }

    #[test]
    fn track_performer_line_is_emitted() {
        let parser = RegexTrackParser::new(
            r"^(?P<minutes>\d+):(?P<seconds>\d+) (?P<performer>.+?) - (?P<title>.+)$",
            true,
        )
        .unwrap();

        let tracks = make_cue_tracks("0:30 Someone - Song", &parser).unwrap();
        assert_eq!(
            tracks,
            "    TRACK 01 AUDIO\n        TITLE \"Song\"\n        PERFORMER Someone\n        INDEX 01 00:30:00\n"
        );
    }

    #[test]
    fn surrounding_newlines_and_whitespace_are_ignored() {
        let tracks = make_cue_tracks(
            "\n  0:00 First \r\n\t1:00 Second\n\n",
            &RegexTrackParser::default(),
        )
        .unwrap();
        assert_eq!(tracks.matches("TRACK").count(), 2);
        assert!(tracks.contains("TITLE \"First\""));
        assert!(tracks.contains("TITLE \"Second\""));
    }

    #[test]
    fn track_numbers_are_sequential() {
        let input: String = (0..120).map(|i| format!("{i}:00 Track {i}\n")).collect();
        let tracks = make_cue_tracks(&input, &RegexTrackParser::default());

        // minutes above 99 do not match the default pattern
        assert!(matches!(
            tracks,
            Err(CueError::MalformedLine {
                line_number: 101,
                ..
            })
        ));

        let input: String = (0..99).map(|i| format!("{i}:00 Track {i}\n")).collect();
        let tracks = make_cue_tracks(&input, &RegexTrackParser::default()).unwrap();
        let numbers: Vec<String> = tracks
            .lines()
            .filter_map(|line| line.trim().strip_prefix("TRACK "))
            .map(|rest| rest.trim_end_matches(" AUDIO").to_string())
            .collect();

        let expected: Vec<String> = (1..=99).map(pad).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn too_many_tracks_fails_before_parsing() {
        let input = vec!["garbage"; 1000].join("\n");
        let result = make_cue(&input, &album(), &RegexTrackParser::default());
        assert!(matches!(result, Err(CueError::TooManyTracks(1000))));
    }

    #[test]
    fn max_tracks_is_accepted() {
        let input = vec!["0:00 Same"; MAX_TRACKS].join("\n");
        let tracks = make_cue_tracks(&input, &RegexTrackParser::default()).unwrap();
        assert!(tracks.contains("TRACK 999 AUDIO"));
        assert!(!tracks.contains("TRACK 1000 AUDIO"));
    }

    #[test]
    fn malformed_line_reports_position_and_content() {
        let result = make_cue("not a timestamp", &album(), &RegexTrackParser::default());
        match result {
            Err(CueError::MalformedLine {
                line_number,
                content,
            }) => {
                assert_eq!(line_number, 1);
                assert_eq!(content, "not a timestamp");
            }
            other => panic!("expected malformed line error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_line_in_the_middle_aborts() {
        let result = make_cue_tracks(
            "0:00 First\noops\n2:00 Third",
            &RegexTrackParser::default(),
        );
        assert!(matches!(
            result,
            Err(CueError::MalformedLine { line_number: 2, .. })
        ));
    }

    #[test]
    fn unanchored_pattern_rejects_leading_text() {
        let parser =
            RegexTrackParser::new(r"(?P<minutes>\d+):(?P<seconds>\d+) (?P<title>.*)", false)
                .unwrap();

        let result = make_cue_tracks("Track 1:05 Intro", &parser);
        assert!(matches!(
            result,
            Err(CueError::MalformedLine { line_number: 1, .. })
        ));
    }

    #[test]
    fn folded_minutes_overflow_is_an_error() {
        let parser = RegexTrackParser::new(
            r"^(?P<hours>\d+):(?P<minutes>\d+):(?P<seconds>\d+) (?P<title>.*)",
            false,
        )
        .unwrap();

        let tracks = make_cue_tracks("71582789:00:00 Long", &parser).unwrap();
        assert!(tracks.contains("INDEX 01 4294967340:00:00"));

        let result = make_cue_tracks("0:00:00 Intro\n307445734561825861:00:00 Long", &parser);
        match result {
            Err(CueError::TimestampOutOfRange {
                line_number,
                content,
            }) => {
                assert_eq!(line_number, 2);
                assert_eq!(content, "307445734561825861:00:00 Long");
            }
            other => panic!("expected out of range error, got {other:?}"),
        }
    }

    #[test]
    fn oversized_number_is_an_error() {
        let parser = RegexTrackParser::new(
            r"^(?P<minutes>\d+):(?P<seconds>\d+) (?P<title>.*)",
            false,
        )
        .unwrap();

        let result = make_cue_tracks("0:99999999999999999999999 Long", &parser);
        assert!(matches!(
            result,
            Err(CueError::TimestampOutOfRange { line_number: 1, .. })
        ));
    }
}
