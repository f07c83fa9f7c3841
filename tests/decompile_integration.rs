//! Integration tests for whole-directory and single-file decompilation runs.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use mbdecomp::{
    CancelToken, DecompileConfig, DecompileError, Decompiler, FileFormat, FileOutcome, Mode,
    RunStatus,
};
use tempfile::TempDir;

const SCRIPTS: &str =
    "scriptsfile version 1\n 2\ngame_start -1\n 2 1 2 1 5 -1507 1 7\nhelper 1\n 0\n";
const SIMPLE_TRIGGERS: &str = "simple_triggers_file version 1\n 1\n0.500000 1 37 0\n";
const TRUNCATED_DIALOGS: &str = "dialogsfile version 2\n 1\ndlga_start:close 3\n";

fn module_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn config(input: &Path, output: &Path) -> DecompileConfig {
    DecompileConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        mode: Mode::Warband,
        fail_fast: false,
    }
}

#[test]
fn test_directory_run_writes_modules() {
    let input = module_dir(&[
        ("scripts.txt", SCRIPTS),
        ("simple_triggers.txt", SIMPLE_TRIGGERS),
    ]);
    let output = TempDir::new().unwrap();
    let mut seen = Vec::new();
    let report = Decompiler::new(config(input.path(), output.path()), CancelToken::new())
        .run(|file| seen.push(file.input.clone()))
        .unwrap();

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.written(), 2);
    assert_eq!(seen.len(), 2);

    // Script references resolve through the table loaded from the same directory.
    let scripts = fs::read_to_string(output.path().join("module_scripts.py")).unwrap();
    assert!(scripts.contains("call_script(script_helper, 5),"));
    assert!(scripts.contains("neg|troop_is_hero(7),"));

    let triggers = fs::read_to_string(output.path().join("module_simple_triggers.py")).unwrap();
    assert!(triggers.contains("  (0.5,\n    [\n      map_free(),\n    ]),\n"));
}

#[test]
fn test_unknown_format_is_skipped() {
    let input = module_dir(&[
        ("menus.txt", "menusfile version 1\n 0\n"),
        ("scripts.txt", SCRIPTS),
    ]);
    let output = TempDir::new().unwrap();
    let report = Decompiler::new(config(input.path(), output.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.skipped(), 1);
    assert_eq!(
        report.files[0].outcome,
        FileOutcome::Skipped {
            signature: "menusfile version 1".to_string()
        }
    );
    assert!(!output.path().join("module_menus.py").exists());
}

#[test]
fn test_failure_is_isolated_per_file() {
    let input = module_dir(&[
        ("conversation.txt", TRUNCATED_DIALOGS),
        ("scripts.txt", SCRIPTS),
    ]);
    let output = TempDir::new().unwrap();
    let report = Decompiler::new(config(input.path(), output.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();

    assert_eq!(report.status, RunStatus::CompletedWithErrors);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.written(), 1);
    assert!(matches!(
        report.files[0].outcome,
        FileOutcome::Failed { line: Some(_), .. }
    ));
    assert!(!output.path().join("module_dialogs.py").exists());
    assert!(output.path().join("module_scripts.py").exists());
}

#[test]
fn test_fail_fast_aborts_run() {
    let input = module_dir(&[
        ("conversation.txt", TRUNCATED_DIALOGS),
        ("scripts.txt", SCRIPTS),
    ]);
    let output = TempDir::new().unwrap();
    let config = DecompileConfig {
        fail_fast: true,
        ..config(input.path(), output.path())
    };
    let report = Decompiler::new(config, CancelToken::new())
        .run(|_| {})
        .unwrap();

    assert_eq!(report.status, RunStatus::Aborted);
    assert_eq!(report.files.len(), 1);
    assert!(!output.path().join("module_scripts.py").exists());
}

#[test]
fn test_cancelled_before_start() {
    let input = module_dir(&[("scripts.txt", SCRIPTS)]);
    let output = TempDir::new().unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();
    let report = Decompiler::new(config(input.path(), output.path()), cancel)
        .run(|_| {})
        .unwrap();

    assert_eq!(report.status, RunStatus::Cancelled);
    assert!(report.files.is_empty());
    assert!(!output.path().join("module_scripts.py").exists());
}

#[test]
fn test_single_file_mode() {
    let input = module_dir(&[("scripts.txt", SCRIPTS), ("variables.txt", "var_a\n")]);
    let output = TempDir::new().unwrap();
    let report = Decompiler::new(
        config(&input.path().join("scripts.txt"), output.path()),
        CancelToken::new(),
    )
    .run(|_| {})
    .unwrap();

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(
        report.files[0].outcome,
        FileOutcome::Written {
            format: FileFormat::Scripts,
            output: output.path().join("module_scripts.py"),
        }
    );
    // Sibling tables are still used for resolution.
    let scripts = fs::read_to_string(output.path().join("module_scripts.py")).unwrap();
    assert!(scripts.contains("script_helper"));
    assert!(!output.path().join("variables.txt").exists());
}

#[test]
fn test_variables_copied_in_directory_mode() {
    let input = module_dir(&[("variables.txt", "var_a\nvar_b\n")]);
    let output = TempDir::new().unwrap();
    let report = Decompiler::new(config(input.path(), output.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();

    assert!(report.files.is_empty());
    assert_eq!(
        fs::read_to_string(output.path().join("variables.txt")).unwrap(),
        "var_a\nvar_b\n"
    );
}

#[test]
fn test_variables_not_copied_onto_itself() {
    let input = module_dir(&[("variables.txt", "var_a\n")]);
    Decompiler::new(config(input.path(), input.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();
    assert_eq!(
        fs::read_to_string(input.path().join("variables.txt")).unwrap(),
        "var_a\n"
    );
}

#[test]
fn test_missing_input_directory() {
    let output = TempDir::new().unwrap();
    let missing = output.path().join("no_such_module");
    let err = Decompiler::new(config(&missing, output.path()), CancelToken::new())
        .run(|_| {})
        .unwrap_err();
    assert!(matches!(err, DecompileError::InputNotFound(path) if path == missing));
}

#[test]
fn test_output_overwrites_previous_run() {
    let input = module_dir(&[("scripts.txt", SCRIPTS)]);
    let output = TempDir::new().unwrap();
    fs::write(output.path().join("module_scripts.py"), "stale").unwrap();
    Decompiler::new(config(input.path(), output.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();
    let scripts = fs::read_to_string(output.path().join("module_scripts.py")).unwrap();
    assert!(scripts.starts_with("# -*- coding: utf-8 -*-"));
}

#[test]
fn test_constants_module_follows_mode() {
    let input = module_dir(&[("scripts.txt", SCRIPTS)]);
    let warband_out = TempDir::new().unwrap();
    Decompiler::new(config(input.path(), warband_out.path()), CancelToken::new())
        .run(|_| {})
        .unwrap();
    let warband = fs::read_to_string(warband_out.path().join("module_constants.py")).unwrap();
    assert!(warband.starts_with("# -*- coding: utf-8 -*-\nfrom header_common import *\n"));
    assert!(warband.contains("Mount&Blade Warband"));
    assert!(!warband.contains("from module_constants import"));

    let vanilla_out = TempDir::new().unwrap();
    let vanilla_config = DecompileConfig {
        mode: Mode::Vanilla,
        ..config(input.path(), vanilla_out.path())
    };
    Decompiler::new(vanilla_config, CancelToken::new())
        .run(|_| {})
        .unwrap();
    let vanilla = fs::read_to_string(vanilla_out.path().join("module_constants.py")).unwrap();
    assert!(vanilla.contains("Mount&Blade 1.011"));
    assert_ne!(vanilla, warband);
}

#[test]
fn test_constants_module_not_written_for_single_file() {
    let input = module_dir(&[("scripts.txt", SCRIPTS)]);
    let output = TempDir::new().unwrap();
    Decompiler::new(
        config(&input.path().join("scripts.txt"), output.path()),
        CancelToken::new(),
    )
    .run(|_| {})
    .unwrap();
    assert!(!output.path().join("module_constants.py").exists());
}

#[test]
fn test_cancel_between_files() {
    let input = module_dir(&[
        ("scripts.txt", SCRIPTS),
        ("simple_triggers.txt", SIMPLE_TRIGGERS),
    ]);
    let output = TempDir::new().unwrap();
    let cancel = CancelToken::new();
    let control = cancel.clone();
    let report = Decompiler::new(config(input.path(), output.path()), cancel)
        .run(|_| control.cancel())
        .unwrap();

    assert_eq!(report.status, RunStatus::Cancelled);
    assert_eq!(report.files.len(), 1);
    assert!(matches!(report.files[0].outcome, FileOutcome::Written { .. }));
    assert!(output.path().join("module_scripts.py").exists());
    assert!(!output.path().join("module_simple_triggers.py").exists());

    // Only finished modules and the constants module are left behind.
    let mut names: Vec<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["module_constants.py", "module_scripts.py"]);
}
