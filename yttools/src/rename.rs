//! Renamer: apply the operator-edited manifest to the working directory.
//!
//! A line renames only when it splits into exactly two parts on the
//! separator; everything else is reported as ignored. There is no escaping -
//! a filename that itself contains the separator will mis-split, which is
//! the operator's responsibility when picking the separator.

use crate::list::MANIFEST_NAME;
use crate::report;
use color_eyre::Section;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

/// Result of applying one manifest line.
#[derive(Debug)]
pub enum LineOutcome {
    Renamed {
        old: String,
        new: String,
    },
    /// The rename syscall failed: missing source, empty or invalid target.
    Failed {
        old: String,
        new: String,
        error: std::io::Error,
    },
    /// The line did not split into exactly two parts.
    Ignored {
        line: String,
    },
}

/// Split one manifest line and attempt the rename it describes.
///
/// The new name is right-trimmed only, so a leading space in the new name is
/// preserved; the old name is taken verbatim. An empty old or new name is a
/// failure, never a rename attempt - `dir.join("")` is the directory itself
/// and a same-path rename would report a success that renamed nothing.
pub fn apply_line(dir: &Path, line: &str, separator: &str) -> LineOutcome {
    let parts: Vec<&str> = line.split(separator).collect();

    match parts.as_slice() {
        [old, new] => {
            let new = new.trim_end();
            if old.is_empty() || new.is_empty() {
                return LineOutcome::Failed {
                    old: old.to_string(),
                    new: new.to_string(),
                    error: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "empty file name",
                    ),
                };
            }
            match fs::rename(dir.join(old), dir.join(new)) {
                Ok(()) => LineOutcome::Renamed {
                    old: old.to_string(),
                    new: new.to_string(),
                },
                Err(error) => LineOutcome::Failed {
                    old: old.to_string(),
                    new: new.to_string(),
                    error,
                },
            }
        }
        _ => LineOutcome::Ignored {
            line: line.trim_end().to_string(),
        },
    }
}

/// Read the manifest and apply every line, reporting each outcome as it lands.
///
/// A line failure never stops the following lines; only a missing or
/// unreadable manifest ends the step.
pub fn rename_from_manifest(dir: &Path, separator: &str) -> Result<Vec<LineOutcome>> {
    let manifest = dir.join(MANIFEST_NAME);
    let text = fs::read_to_string(&manifest)
        .wrap_err_with(|| format!("failed to read {:?}", manifest.display()))
        .suggestion("run ytt --create-filelist first to produce list.txt")?;

    tracing::info!(manifest = ?manifest.display(), separator, "renaming from manifest");

    let outcomes: Vec<LineOutcome> = text
        .lines()
        .map(|line| {
            let outcome = apply_line(dir, line, separator);
            report::rename_line(&outcome);
            outcome
        })
        .collect();

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("yttools-rename-{name}"));

        // Clean up previous test run
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).expect("failed to create temp dir");

        dir
    }

    #[test]
    fn renames_pair_and_trims_new_name() {
        let dir = temp_dir("pair");
        fs::write(dir.join("old.txt"), b"payload").unwrap();
        fs::write(dir.join(MANIFEST_NAME), "old.txt=>new.txt  \n").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Renamed { old, new }] if old == "old.txt" && new == "new.txt"
        ));
        assert!(dir.join("new.txt").exists());
        assert!(!dir.join("old.txt").exists());
    }

    #[test]
    fn leading_space_in_new_name_is_preserved() {
        let dir = temp_dir("lead");
        fs::write(dir.join("old.txt"), b"").unwrap();
        fs::write(dir.join(MANIFEST_NAME), "old.txt=> new.txt\n").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Renamed { new, .. }] if new == " new.txt"
        ));
        assert!(dir.join(" new.txt").exists());
    }

    #[test]
    fn second_run_reports_missing_source() {
        let dir = temp_dir("rerun");
        fs::write(dir.join("old.txt"), b"payload").unwrap();
        fs::write(dir.join(MANIFEST_NAME), "old.txt=>new.txt").unwrap();

        rename_from_manifest(&dir, "=>").unwrap();
        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Failed { old, .. }] if old == "old.txt"
        ));
        assert!(dir.join("new.txt").exists());
    }

    #[test]
    fn separator_only_line_is_a_failure_not_a_rename() {
        let dir = temp_dir("seponly");
        fs::write(dir.join(MANIFEST_NAME), "=>\n").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Failed { old, new, error }]
                if old.is_empty() && new.is_empty()
                    && error.kind() == std::io::ErrorKind::InvalidInput
        ));
        assert!(dir.exists(), "the directory itself must be untouched");
    }

    #[test]
    fn empty_new_name_is_a_failure() {
        let dir = temp_dir("emptynew");
        fs::write(dir.join("old.txt"), b"payload").unwrap();
        fs::write(dir.join(MANIFEST_NAME), "old.txt=>   \n").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Failed { old, new, .. }] if old == "old.txt" && new.is_empty()
        ));
        assert!(dir.join("old.txt").exists(), "source must not move");
    }

    #[test]
    fn line_without_separator_is_ignored() {
        let dir = temp_dir("bare");
        fs::write(dir.join(MANIFEST_NAME), "just-a-filename.mp4").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(
            outcomes.as_slice(),
            [LineOutcome::Ignored { line }] if line == "just-a-filename.mp4"
        ));
    }

    #[test]
    fn line_with_two_separators_is_ignored() {
        let dir = temp_dir("oversplit");
        fs::write(dir.join("a=>b.txt"), b"").unwrap();
        fs::write(dir.join(MANIFEST_NAME), "a=>b.txt=>c.txt").unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert!(matches!(outcomes.as_slice(), [LineOutcome::Ignored { .. }]));
        assert!(dir.join("a=>b.txt").exists());
    }

    #[test]
    fn one_outcome_per_line_and_failures_do_not_stop_the_rest() {
        let dir = temp_dir("mixed");
        fs::write(dir.join("b.txt"), b"").unwrap();
        fs::write(
            dir.join(MANIFEST_NAME),
            "missing.txt=>x.txt\nplain-line\nb.txt=>c.txt\n",
        )
        .unwrap();

        let outcomes = rename_from_manifest(&dir, "=>").unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], LineOutcome::Failed { .. }));
        assert!(matches!(outcomes[1], LineOutcome::Ignored { .. }));
        assert!(matches!(outcomes[2], LineOutcome::Renamed { .. }));
        assert!(dir.join("c.txt").exists());
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = temp_dir("nomanifest");

        assert!(rename_from_manifest(&dir, "=>").is_err());
    }
}
