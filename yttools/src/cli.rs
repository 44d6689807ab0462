//! CLI argument definitions using clap, plus the mode dispatcher.

use crate::config::{Config, Mode};
use crate::gate::{self, Verdict};
use crate::{extract, fetch, list, rename};
use clap::{ArgGroup, Parser};
use eyre::{Context, Result};

/// Command line surface.
///
/// Exactly one mode flag per invocation; `--logging` combines with any of
/// them. The composite modes keep their historic two-letter spellings as
/// long aliases (`--dc`, `--re`, `--de`, `--dee`, `--dce`, `--ae`).
#[derive(Debug, Parser)]
#[command(name = "ytt")]
#[command(version)]
#[command(about = "Download YouTube playlists, rename files in bulk, extract audio from videos")]
#[command(
    after_help = "Hint: pick a separator made of characters that cannot appear in a file title, \
                  so an edited list.txt line always splits into exactly one old and one new name."
)]
#[command(group = ArgGroup::new("mode").required(true).multiple(false))]
pub struct Cli {
    /// Enable console output from yt-dlp and ffmpeg
    #[arg(short = 'l', long)]
    pub logging: bool,

    /// Download all video from a playlist at or below QUALITY (vertical resolution)
    #[arg(
        short = 'd',
        long,
        group = "mode",
        num_args = 2,
        value_names = ["PLAYLIST_URL", "QUALITY"]
    )]
    pub download_playlist: Option<Vec<String>>,

    /// Create a list of all file names in this directory
    #[arg(short = 'c', long, group = "mode")]
    pub create_filelist: bool,

    /// Rename files from the list; old and new names are joined by SEPARATOR
    #[arg(short = 'r', long, group = "mode", value_name = "SEPARATOR")]
    pub rename_files: Option<String>,

    /// Extract audio tracks from all videos in this directory (requires ffmpeg)
    #[arg(short = 'e', long, group = "mode")]
    pub extract_audio: bool,

    /// Download a playlist, then create the file list
    #[arg(
        long,
        visible_alias = "dc",
        group = "mode",
        num_args = 2,
        value_names = ["PLAYLIST_URL", "QUALITY"]
    )]
    pub download_create: Option<Vec<String>>,

    /// Rename files from the list, then extract audio (requires ffmpeg)
    #[arg(long, visible_alias = "re", group = "mode", value_name = "SEPARATOR")]
    pub rename_extract: Option<String>,

    /// Download a playlist, then extract audio from the videos (requires ffmpeg)
    #[arg(
        long,
        visible_alias = "de",
        group = "mode",
        num_args = 2,
        value_names = ["PLAYLIST_URL", "QUALITY"]
    )]
    pub download_extract: Option<Vec<String>>,

    /// Download playlist audio directly, skipping the video plus extraction round trip
    #[arg(long, visible_alias = "dee", group = "mode", value_name = "PLAYLIST_URL")]
    pub download_extract_extension: Option<String>,

    /// Download playlist audio directly, then create the file list
    #[arg(long, visible_alias = "dce", group = "mode", value_name = "PLAYLIST_URL")]
    pub download_create_extension: Option<String>,

    /// Download, list, wait for edited names, rename, then extract audio
    #[arg(
        short = 'a',
        long,
        group = "mode",
        num_args = 3,
        value_names = ["PLAYLIST_URL", "QUALITY", "SEPARATOR"]
    )]
    pub all: Option<Vec<String>>,

    /// Download audio, list, wait for edited names, then rename
    #[arg(
        long,
        visible_alias = "ae",
        group = "mode",
        num_args = 2,
        value_names = ["PLAYLIST_URL", "SEPARATOR"]
    )]
    pub all_extension: Option<Vec<String>>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    execute(cli.try_into()?)
}

/// Run the fixed step sequence of the selected mode, strictly in order.
///
/// Fetch failures are reported inline and do not stop later steps of the same
/// mode; a gate abort stops the remaining steps and returns cleanly.
pub fn execute(config: Config) -> Result<()> {
    let dir = std::env::current_dir().wrap_err("failed to resolve the working directory")?;
    let verbose = config.verbose;

    match config.mode {
        Mode::Download { url, quality } => fetch::download_video(&url, quality, verbose),
        Mode::CreateList => {
            list::create_list(&dir)?;
        }
        Mode::Rename { separator } => {
            rename::rename_from_manifest(&dir, &separator)?;
        }
        Mode::Extract => {
            extract::extract_audio(&dir, verbose)?;
        }
        Mode::DownloadCreate { url, quality } => {
            fetch::download_video(&url, quality, verbose);
            list::create_list(&dir)?;
        }
        Mode::RenameExtract { separator } => {
            rename::rename_from_manifest(&dir, &separator)?;
            extract::extract_audio(&dir, verbose)?;
        }
        Mode::DownloadExtract { url, quality } => {
            fetch::download_video(&url, quality, verbose);
            extract::extract_audio(&dir, verbose)?;
        }
        Mode::DownloadAudio { url } => fetch::download_audio(&url, verbose),
        Mode::DownloadAudioCreate { url } => {
            fetch::download_audio(&url, verbose);
            list::create_list(&dir)?;
        }
        Mode::All {
            url,
            quality,
            separator,
        } => {
            fetch::download_video(&url, quality, verbose);
            list::create_list(&dir)?;
            if gate::await_confirmation()? == Verdict::Abort {
                return Ok(());
            }
            rename::rename_from_manifest(&dir, &separator)?;
            extract::extract_audio(&dir, verbose)?;
        }
        Mode::AllExtension { url, separator } => {
            fetch::download_audio(&url, verbose);
            list::create_list(&dir)?;
            if gate::await_confirmation()? == Verdict::Abort {
                return Ok(());
            }
            rename::rename_from_manifest(&dir, &separator)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_download_playlist() {
        let cli = Cli::parse_from(["ytt", "-d", "https://youtube.com/playlist?list=x", "720"]);

        assert_eq!(
            cli.download_playlist.as_deref(),
            Some(&["https://youtube.com/playlist?list=x".to_string(), "720".to_string()][..])
        );
        assert!(!cli.logging);
    }

    #[test]
    fn parses_rename_files() {
        let cli = Cli::parse_from(["ytt", "-r", "=>"]);

        assert_eq!(cli.rename_files.as_deref(), Some("=>"));
    }

    #[test]
    fn parses_all_mode() {
        let cli = Cli::parse_from(["ytt", "-a", "https://youtube.com/playlist?list=x", "1080", "=>"]);

        let args = cli.all.expect("all mode should be parsed");
        assert_eq!(args, ["https://youtube.com/playlist?list=x", "1080", "=>"]);
    }

    #[test]
    fn parses_composite_alias() {
        let cli = Cli::parse_from(["ytt", "--dc", "https://youtube.com/playlist?list=x", "480"]);

        assert!(cli.download_create.is_some());

        let cli = Cli::parse_from(["ytt", "--dee", "https://youtube.com/playlist?list=x"]);

        assert!(cli.download_extract_extension.is_some());
    }

    #[test]
    fn logging_combines_with_mode() {
        let cli = Cli::parse_from(["ytt", "-l", "-e"]);

        assert!(cli.logging);
        assert!(cli.extract_audio);
    }

    #[test]
    fn rejects_zero_modes() {
        assert!(Cli::try_parse_from(["ytt"]).is_err());
        assert!(Cli::try_parse_from(["ytt", "-l"]).is_err());
    }

    #[test]
    fn rejects_two_modes() {
        assert!(Cli::try_parse_from(["ytt", "-c", "-e"]).is_err());
        assert!(Cli::try_parse_from(["ytt", "-r", "=>", "-d", "url", "720"]).is_err());
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["ytt", "-d", "url-only"]).is_err());
        assert!(Cli::try_parse_from(["ytt", "-a", "url", "720"]).is_err());
    }
}
