//! Transcoder invoker: strip audio from every video in the directory.
//!
//! One ffmpeg subprocess per matched file, sequential. A failed conversion
//! is a per-file outcome, never a reason to stop the remaining files.

use crate::report;
use eyre::Result;
use std::path::Path;
use std::process::Command;

pub const VIDEO_SUFFIX: &str = ".mp4";
pub const AUDIO_SUFFIX: &str = ".mp3";
pub const AUDIO_CODEC: &str = "libmp3lame";
pub const AUDIO_BITRATE: &str = "192k";

/// Result of one directory entry during extraction.
#[derive(Debug)]
pub enum FileOutcome {
    Converted {
        file: String,
    },
    /// ffmpeg exited non-zero or could not be spawned.
    Failed {
        file: String,
        detail: String,
    },
    /// Entry name does not end in the video suffix.
    Ignored {
        file: String,
    },
}

/// Sibling audio name for a video file, `None` when the entry is not a video.
pub fn audio_name(video: &str) -> Option<String> {
    video
        .strip_suffix(VIDEO_SUFFIX)
        .map(|base| format!("{base}{AUDIO_SUFFIX}"))
}

/// Process every entry of the directory, reporting each outcome as it lands.
///
/// The source video is never deleted; an existing target mp3 is overwritten.
pub fn extract_audio(dir: &Path, verbose: bool) -> Result<Vec<FileOutcome>> {
    tracing::info!(dir = ?dir.display(), "extracting audio from videos");

    let mut outcomes = Vec::new();
    for name in crate::list::entry_names(dir)? {
        let outcome = match audio_name(&name) {
            Some(output) => convert(dir, &name, &output, verbose),
            None => FileOutcome::Ignored { file: name },
        };

        report::extract_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn convert(dir: &Path, input: &str, output: &str, verbose: bool) -> FileOutcome {
    let mut command = Command::new("ffmpeg");
    command
        .current_dir(dir)
        .args(["-y", "-i", input, "-vn", "-acodec", AUDIO_CODEC, "-ab", AUDIO_BITRATE, output]);

    // Verbose inherits ffmpeg's own console output; quiet captures it and
    // only surfaces the diagnostics on failure.
    let result = if verbose {
        command.status().map(|status| (status, String::new()))
    } else {
        command.output().map(|out| {
            (
                out.status,
                String::from_utf8_lossy(&out.stderr).into_owned(),
            )
        })
    };

    match result {
        Ok((status, _)) if status.success() => FileOutcome::Converted {
            file: input.to_string(),
        },
        Ok((status, stderr)) => FileOutcome::Failed {
            file: input.to_string(),
            detail: if stderr.is_empty() {
                format!("ffmpeg exited with {status}")
            } else {
                stderr
            },
        },
        Err(error) => FileOutcome::Failed {
            file: input.to_string(),
            detail: error.to_string(),
        },
    }
}
