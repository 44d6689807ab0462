//! Playlist download presets: quality-capped video or direct mp3 audio.
//!
//! ```no_run
//! use yttools_dl::{dl::download, presets::MediaFormat};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/playlist?list=example", MediaFormat::Video { quality: 1080 }.into())?;
//! # Ok(())
//! # }
//! ```

use crate::dl::{DownloadOptions, OutputTemplates, PostProcessor};

/// Output filename template: media title plus container extension.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Target audio codec for direct audio download.
pub const AUDIO_CODEC: &str = "mp3";

/// Target audio bitrate in kbps, as yt-dlp expects it.
pub const AUDIO_QUALITY: &str = "192";

/// Media selection for a playlist download.
#[derive(Copy, Clone, Debug)]
pub enum MediaFormat {
    /// Best stream with vertical resolution at or below `quality`.
    Video { quality: u32 },
    /// Best audio, extracted to mp3 at 192 kbps, thumbnail saved alongside.
    Audio,
}

impl From<MediaFormat> for DownloadOptions {
    fn from(media: MediaFormat) -> Self {
        match media {
            MediaFormat::Video { quality } => Self {
                format: Some(format!("best[height<={quality}]")),
                outtmpl: Some(OutputTemplates::simple(OUTPUT_TEMPLATE.to_string())),
                ..Default::default()
            },
            MediaFormat::Audio => Self {
                format: Some("bestaudio/best".to_string()),
                outtmpl: Some(OutputTemplates::simple(OUTPUT_TEMPLATE.to_string())),
                postprocessors: Some(vec![PostProcessor {
                    key: "FFmpegExtractAudio".to_string(),
                    preferredcodec: Some(AUDIO_CODEC.to_string()),
                    preferredquality: Some(AUDIO_QUALITY.to_string()),
                }]),
                writethumbnail: Some(true),
                ..Default::default()
            },
        }
    }
}
