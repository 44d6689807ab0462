//! Resolved invocation configuration.
//!
//! clap guarantees that exactly one mode flag was given and that it carried
//! the right number of values; this module turns the raw strings into one
//! immutable [`Config`] consumed by the dispatcher.

use crate::cli::Cli;
use color_eyre::Section;
use eyre::{Context, Result, bail, ensure, eyre};

/// Immutable per-run configuration, produced once from the parsed arguments.
#[derive(Debug)]
pub struct Config {
    /// Verbose output from the yt-dlp and ffmpeg wrappers.
    pub verbose: bool,
    pub mode: Mode,
}

/// The single action (or fixed action sequence) selected for this run.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Download { url: String, quality: u32 },
    CreateList,
    Rename { separator: String },
    Extract,
    DownloadCreate { url: String, quality: u32 },
    RenameExtract { separator: String },
    DownloadExtract { url: String, quality: u32 },
    DownloadAudio { url: String },
    DownloadAudioCreate { url: String },
    All { url: String, quality: u32, separator: String },
    AllExtension { url: String, separator: String },
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let verbose = cli.logging;

        let mode = if let Some(args) = cli.download_playlist {
            let (url, quality) = url_quality(args)?;
            Mode::Download { url, quality }
        } else if cli.create_filelist {
            Mode::CreateList
        } else if let Some(separator) = cli.rename_files {
            Mode::Rename {
                separator: checked_separator(separator)?,
            }
        } else if cli.extract_audio {
            Mode::Extract
        } else if let Some(args) = cli.download_create {
            let (url, quality) = url_quality(args)?;
            Mode::DownloadCreate { url, quality }
        } else if let Some(separator) = cli.rename_extract {
            Mode::RenameExtract {
                separator: checked_separator(separator)?,
            }
        } else if let Some(args) = cli.download_extract {
            let (url, quality) = url_quality(args)?;
            Mode::DownloadExtract { url, quality }
        } else if let Some(url) = cli.download_extract_extension {
            Mode::DownloadAudio { url }
        } else if let Some(url) = cli.download_create_extension {
            Mode::DownloadAudioCreate { url }
        } else if let Some(args) = cli.all {
            let [url, quality, separator]: [String; 3] = args
                .try_into()
                .map_err(|_| eyre!("expected PLAYLIST_URL, QUALITY and SEPARATOR"))?;
            Mode::All {
                url,
                quality: parse_quality(&quality)?,
                separator: checked_separator(separator)?,
            }
        } else if let Some(args) = cli.all_extension {
            let [url, separator]: [String; 2] = args
                .try_into()
                .map_err(|_| eyre!("expected PLAYLIST_URL and SEPARATOR"))?;
            Mode::AllExtension {
                url,
                separator: checked_separator(separator)?,
            }
        } else {
            // Unreachable while the clap group stays required.
            bail!("no mode flag selected");
        };

        Ok(Self { verbose, mode })
    }
}

fn url_quality(args: Vec<String>) -> Result<(String, u32)> {
    let [url, quality]: [String; 2] = args
        .try_into()
        .map_err(|_| eyre!("expected PLAYLIST_URL and QUALITY"))?;

    Ok((url, parse_quality(&quality)?))
}

fn parse_quality(raw: &str) -> Result<u32> {
    raw.parse()
        .wrap_err_with(|| format!("quality ceiling must be a number, got {raw:?}"))
        .suggestion("pass the maximum accepted vertical resolution, e.g. 720")
}

fn checked_separator(separator: String) -> Result<String> {
    ensure!(!separator.is_empty(), "separator must not be empty");
    Ok(separator)
}
