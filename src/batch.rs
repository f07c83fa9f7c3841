//! Batch runner: one decompilation run over a module directory or one file.
//!
//! The run builds a [`DecompileContext`] once, then visits each data file in
//! the engine's module-file order. Each file's output is written to a
//! temporary file in the output directory and renamed into place only after
//! the whole file decoded, so a failed or cancelled file never leaves a
//! truncated module behind.

use crate::context::{CancelToken, DecompileContext};
use crate::error::{DecodeError, DecompileError, ReadError};
use crate::format::FileFormat;
use crate::ops::{Mode, OperatorTable};
use crate::reader::TokenReader;
use crate::symbols::SymbolTables;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Data files of a module directory, in processing order.
pub const MODULE_FILES: [&str; 27] = [
    "actions.txt",
    "conversation.txt",
    "factions.txt",
    "info_pages.txt",
    "item_kinds1.txt",
    "map_icons.txt",
    "menus.txt",
    "meshes.txt",
    "mission_templates.txt",
    "music.txt",
    "particle_systems.txt",
    "parties.txt",
    "party_templates.txt",
    "postfx.txt",
    "presentations.txt",
    "quests.txt",
    "scene_props.txt",
    "scenes.txt",
    "scripts.txt",
    "simple_triggers.txt",
    "skills.txt",
    "skins.txt",
    "sounds.txt",
    "strings.txt",
    "tableau_materials.txt",
    "triggers.txt",
    "troops.txt",
];

/// Files Mount&Blade 1.011 does not have.
const WARBAND_ONLY: [&str; 2] = ["info_pages.txt", "postfx.txt"];

/// Global variable list, copied through unchanged.
const VARIABLES: &str = "variables.txt";

/// Constants module imported by every generated module.
const CONSTANTS: &str = "module_constants.py";

const CONSTANTS_WARBAND: &str = "# -*- coding: utf-8 -*-\n\
from header_common import *\n\
\n\
# Module constants for Mount&Blade Warband.\n\
# Slot and range names are not kept in compiled data; generated modules use\n\
# their numeric values. Define names here as they are recovered.\n";

const CONSTANTS_VANILLA: &str = "# -*- coding: utf-8 -*-\n\
from header_common import *\n\
\n\
# Module constants for Mount&Blade 1.011.\n\
# Slot and range names are not kept in compiled data; generated modules use\n\
# their numeric values. Define names here as they are recovered.\n";

/// Settings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompileConfig {
    /// Module directory or single data file.
    pub input: PathBuf,
    /// Directory receiving generated modules.
    pub output: PathBuf,
    /// Engine build the files were compiled for.
    pub mode: Mode,
    /// Stop the run at the first file that fails to decode.
    pub fail_fast: bool,
}

impl Default for DecompileConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output: PathBuf::from("decompiled"),
            mode: Mode::default(),
            fail_fast: false,
        }
    }
}

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every file was written or skipped.
    Completed,
    /// At least one file failed; the others were processed.
    CompletedWithErrors,
    /// A file failed with fail-fast set; later files were not visited.
    Aborted,
    /// Cancellation was requested.
    Cancelled,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Decompiled and written.
    Written {
        /// Detected format.
        format: FileFormat,
        /// Generated module path.
        output: PathBuf,
    },
    /// No driver for the file's signature.
    Skipped {
        /// First line of the file.
        signature: String,
    },
    /// Decoding or I/O failed; nothing was written for this file.
    Failed {
        /// Failure description.
        error: String,
        /// Line the failure was detected on, when known.
        line: Option<usize>,
    },
    /// The run was cancelled while this file was in progress.
    Cancelled,
}

/// Outcome for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Input path.
    pub input: PathBuf,
    /// Result.
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Engine mode used.
    pub mode: Mode,
    /// Terminal status.
    pub status: RunStatus,
    /// Per-file outcomes, in processing order.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Number of files written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Written { .. }))
    }

    /// Number of files skipped as unknown formats.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Runs a decompilation according to a [`DecompileConfig`].
#[derive(Debug)]
pub struct Decompiler {
    config: DecompileConfig,
    cancel: CancelToken,
}

impl Decompiler {
    /// New runner; `cancel` may be triggered from another thread.
    #[must_use]
    pub fn new(config: DecompileConfig, cancel: CancelToken) -> Self {
        Self { config, cancel }
    }

    /// Configuration of this runner.
    #[must_use]
    pub fn config(&self) -> &DecompileConfig {
        &self.config
    }

    /// Data files the run will visit, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DecompileError::InputNotFound`] if the input does not exist.
    pub fn plan(&self) -> Result<Vec<PathBuf>, DecompileError> {
        let input = &self.config.input;
        if input.is_file() {
            return Ok(vec![input.clone()]);
        }
        if !input.is_dir() {
            return Err(DecompileError::InputNotFound(input.clone()));
        }
        let vanilla = self.config.mode.is_vanilla();
        Ok(MODULE_FILES
            .iter()
            .filter(|name| !(vanilla && WARBAND_ONLY.contains(*name)))
            .map(|name| input.join(name))
            .filter(|path| {
                let present = path.is_file();
                if !present {
                    tracing::debug!(path = %path.display(), "not present, skipping");
                }
                present
            })
            .collect())
    }

    /// Run the decompilation, calling `on_file` after each file.
    ///
    /// Per-file failures are recorded in the report, not returned.
    ///
    /// # Errors
    ///
    /// Returns [`DecompileError::InputNotFound`] if the input does not exist
    /// and [`DecompileError::Io`] if the output directory cannot be created,
    /// `variables.txt` cannot be copied or `module_constants.py` cannot be
    /// written.
    pub fn run<F>(&self, mut on_file: F) -> Result<RunReport, DecompileError>
    where
        F: FnMut(&FileReport),
    {
        let files = self.plan()?;
        let output = &self.config.output;
        fs::create_dir_all(output).map_err(io_error(output))?;

        let source_dir = self.source_dir();
        let ctx = DecompileContext::new(
            OperatorTable::load(self.config.mode),
            SymbolTables::load(&source_dir),
            self.cancel.clone(),
        );
        if self.config.input.is_dir() {
            copy_variables(&source_dir, output)?;
            write_constants(output, self.config.mode)?;
        }
        tracing::info!(mode = %self.config.mode, files = files.len(), "starting decompilation");

        let mut report = RunReport {
            mode: self.config.mode,
            status: RunStatus::Completed,
            files: Vec::with_capacity(files.len()),
        };
        for path in files {
            if self.cancel.is_cancelled() {
                report.status = RunStatus::Cancelled;
                break;
            }
            let outcome = self.process(&path, &ctx);
            let stop = match &outcome {
                FileOutcome::Failed { .. } if self.config.fail_fast => Some(RunStatus::Aborted),
                FileOutcome::Failed { .. } => {
                    report.status = RunStatus::CompletedWithErrors;
                    None
                }
                FileOutcome::Cancelled => Some(RunStatus::Cancelled),
                FileOutcome::Written { .. } | FileOutcome::Skipped { .. } => None,
            };
            let file = FileReport {
                input: path,
                outcome,
            };
            on_file(&file);
            report.files.push(file);
            if let Some(status) = stop {
                report.status = status;
                break;
            }
        }
        tracing::info!(
            status = ?report.status,
            written = report.written(),
            skipped = report.skipped(),
            failed = report.failed(),
            "decompilation finished"
        );
        Ok(report)
    }

    fn source_dir(&self) -> PathBuf {
        let input = &self.config.input;
        if input.is_dir() {
            return input.clone();
        }
        match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn process(&self, path: &Path, ctx: &DecompileContext) -> FileOutcome {
        tracing::info!(path = %path.display(), "decompiling");
        match decompile_file(path, &self.config.output, ctx) {
            Ok((format, output)) => FileOutcome::Written { format, output },
            Err(DecompileError::UnknownFileFormat { path, signature }) => {
                tracing::warn!(path = %path.display(), %signature, "unknown file format, skipped");
                FileOutcome::Skipped { signature }
            }
            Err(DecompileError::Cancelled) => FileOutcome::Cancelled,
            Err(e) => {
                tracing::warn!(error = %e, "file failed");
                let line = match &e {
                    DecompileError::Decode { source, .. } => source.line(),
                    _ => None,
                };
                FileOutcome::Failed {
                    error: e.to_string(),
                    line,
                }
            }
        }
    }
}

/// Decompile one file into `output_dir`.
///
/// # Errors
///
/// Returns [`DecompileError::UnknownFileFormat`] for an unrecognised
/// signature, [`DecompileError::Decode`] for a decode failure,
/// [`DecompileError::Cancelled`] on cancellation and [`DecompileError::Io`]
/// if the file cannot be read or its output written.
pub fn decompile_file(
    path: &Path,
    output_dir: &Path,
    ctx: &DecompileContext,
) -> Result<(FileFormat, PathBuf), DecompileError> {
    let decode_error = |source: DecodeError| match source {
        DecodeError::Cancelled => DecompileError::Cancelled,
        source => DecompileError::Decode {
            path: path.to_path_buf(),
            source,
        },
    };
    if ctx.is_cancelled() {
        return Err(DecompileError::Cancelled);
    }

    let mut reader = TokenReader::open(path).map_err(io_error(path))?;
    let signature = match reader.next_line() {
        Ok(line) => line,
        Err(ReadError::UnexpectedEndOfStream { .. }) => String::new(),
        Err(e) => return Err(decode_error(e.into())),
    };
    let format = FileFormat::detect(&signature).ok_or_else(|| DecompileError::UnknownFileFormat {
        path: path.to_path_buf(),
        signature: signature.trim().to_string(),
    })?;
    let text = format.decompile(&mut reader, ctx).map_err(decode_error)?;
    drop(reader);

    let output = write_atomic(output_dir, format.output_name(), &text)?;
    Ok((format, output))
}

/// Write `contents` to `dir/name` through a temporary file in `dir`.
fn write_atomic(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, DecompileError> {
    let target = dir.join(name);
    let mut file = NamedTempFile::new_in(dir).map_err(io_error(&target))?;
    file.write_all(contents.as_bytes()).map_err(io_error(&target))?;
    file.persist(&target).map_err(|e| DecompileError::Io {
        path: target.clone(),
        source: e.error,
    })?;
    Ok(target)
}

fn copy_variables(source_dir: &Path, output: &Path) -> Result<(), DecompileError> {
    let from = source_dir.join(VARIABLES);
    if !from.is_file() {
        return Ok(());
    }
    let to = output.join(VARIABLES);
    // Copying a file onto itself would truncate it.
    let same = from
        .canonicalize()
        .is_ok_and(|a| to.canonicalize().is_ok_and(|b| a == b));
    if same {
        return Ok(());
    }
    fs::copy(&from, &to).map_err(io_error(&to))?;
    Ok(())
}

/// Write the constants module for `mode`, replacing any previous one.
fn write_constants(output: &Path, mode: Mode) -> Result<(), DecompileError> {
    let text = if mode.is_vanilla() {
        CONSTANTS_VANILLA
    } else {
        CONSTANTS_WARBAND
    };
    write_atomic(output, CONSTANTS, text)?;
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> DecompileError + '_ {
    move |source| DecompileError::Io {
        path: path.to_path_buf(),
        source,
    }
}
