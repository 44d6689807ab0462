//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use yttools_dl::{dl::download, presets::MediaFormat};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/playlist?list=example", MediaFormat::Audio.into())?;
//! # Ok(())
//! # }
//! ```

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Create with home and temp directories.
    pub fn simple(home: &Path, temp: &Path) -> Self {
        Self::default().with_home(home).with_temp(temp)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp".to_string(), temp)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
///
/// `preferredquality` is a string on the Python side (e.g. `"192"` for 192 kbps).
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are stripped before reaching `YoutubeDL`, so yt-dlp's own
/// defaults apply for anything left unset.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub writethumbnail: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

impl DownloadOptions {
    /// Set yt-dlp console verbosity. Quiet also suppresses warnings.
    pub fn with_verbosity(mut self, verbose: bool) -> Self {
        self.quiet = Some(!verbose);
        self.no_warnings = Some(!verbose);
        self
    }
}

/// Download every entry matched by a playlist or video URL.
///
/// Blocks until yt-dlp has processed the whole playlist. Media lands wherever
/// `paths`/`outtmpl` point, which is the process working directory by default.
pub fn download(url: &str, opts: DownloadOptions) -> Result<(), PyErr> {
    Python::attach(|py| {
        let module = PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")?;

        let py_params = opts.into_pyobject(py)?;

        module.getattr("download")?.call1((url, py_params))?;

        Ok(())
    })
}
