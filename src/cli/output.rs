//! Output formatting utilities for CLI.

use mbdecomp::{FileOutcome, RunReport, RunStatus};
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Completed => "completed",
        RunStatus::CompletedWithErrors => "completed with errors",
        RunStatus::Aborted => "aborted",
        RunStatus::Cancelled => "cancelled",
    }
}

/// Format a run report as human-readable text.
pub(super) fn format_text(report: &RunReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Decompilation ({})\n", report.mode));
    for file in &report.files {
        let input = file_name(&file.input);
        let line = match &file.outcome {
            FileOutcome::Written { output, .. } => {
                format!("  [ok]        {input} -> {}\n", file_name(output))
            }
            FileOutcome::Skipped { signature } => {
                format!("  [skipped]   {input}: unknown format `{signature}`\n")
            }
            FileOutcome::Failed { error, .. } => format!("  [failed]    {input}: {error}\n"),
            FileOutcome::Cancelled => format!("  [cancelled] {input}\n"),
        };
        output.push_str(&line);
    }
    output.push_str(&format!(
        "Status: {} ({} written, {} skipped, {} failed)\n",
        status_label(report.status),
        report.written(),
        report.skipped(),
        report.failed()
    ));
    output
}
