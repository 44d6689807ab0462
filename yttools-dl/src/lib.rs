//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`presets`] - Playlist presets for video (quality-capped) and mp3 audio download
//!
//! ## Quick Start
//!
//! **Video preset** (best stream at or below a resolution ceiling):
//! ```no_run
//! use yttools_dl::{dl::download, presets::MediaFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/playlist?list=example", MediaFormat::Video { quality: 720 }.into())?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use yttools_dl::dl::{download, DownloadOptions, OutputTemplates, PostProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio/best".to_string()),
//!     outtmpl: Some(OutputTemplates::simple("%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor {
//!         key: "FFmpegExtractAudio".to_string(),
//!         preferredcodec: Some("mp3".to_string()),
//!         preferredquality: Some("192".to_string()),
//!     }]),
//!     quiet: Some(true),
//!     ..Default::default()
//! };
//!
//! download("https://youtube.com/playlist?list=example", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod presets;
