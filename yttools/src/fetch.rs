//! Playlist fetch steps - thin wrappers over the yt-dlp binding.
//!
//! Download failures are reported inline and swallowed here: a broken URL or
//! network error ends this step with a failure message, never the process.

use crate::report;
use yttools_dl::dl::download;
use yttools_dl::presets::MediaFormat;

/// Download all video from a playlist, capped at `quality` vertical resolution.
pub fn download_video(url: &str, quality: u32, verbose: bool) {
    tracing::info!(url, quality, "downloading playlist video");

    let opts = yttools_dl::dl::DownloadOptions::from(MediaFormat::Video { quality })
        .with_verbosity(verbose);

    match download(url, opts) {
        Ok(()) => report::downloaded_video(),
        Err(error) => report::download_failed(&error),
    }
}

/// Download playlist audio directly as mp3, thumbnail included.
pub fn download_audio(url: &str, verbose: bool) {
    tracing::info!(url, "downloading playlist audio");

    let opts = yttools_dl::dl::DownloadOptions::from(MediaFormat::Audio).with_verbosity(verbose);

    match download(url, opts) {
        Ok(()) => report::downloaded_audio(),
        Err(error) => report::download_failed(&error),
    }
}
