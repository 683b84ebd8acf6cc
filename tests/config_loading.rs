// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use zdialog::config::{
    ConfigFile, WindowSection, apply_program_override, load_and_validate, load_or_default,
};
use zdialog::errors::DialogError;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_gives_defaults() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.program.name, "zenity");
    assert!(cfg.program.path.is_none());
    assert_eq!(cfg.window, WindowSection::default());
    assert!(cfg.window.to_args().is_empty());
}

#[test]
fn full_config_is_read() {
    let file = write_config(
        r#"
[program]
name = "qarma"

[window]
width = 480
height = 200
icon = "warning"
modal = true
ok_label = "Go"
cancel_label = "Stop"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.program.name, "qarma");
    assert_eq!(
        cfg.window.to_args(),
        vec![
            "--width=480",
            "--height=200",
            "--window-icon=warning",
            "--modal",
            "--ok-label=Go",
            "--cancel-label=Stop",
        ]
    );
}

#[test]
fn zero_width_is_rejected() {
    let file = write_config("[window]\nwidth = 0\n");
    match load_and_validate(file.path()) {
        Err(DialogError::ConfigError(msg)) => assert!(msg.contains("width"), "{msg}"),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn blank_label_is_rejected() {
    let file = write_config("[window]\nok_label = \"  \"\n");
    match load_and_validate(file.path()) {
        Err(DialogError::ConfigError(msg)) => assert!(msg.contains("ok_label"), "{msg}"),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn empty_program_name_is_rejected() {
    let file = write_config("[program]\nname = \"\"\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(DialogError::ConfigError(_))
    ));
}

#[test]
fn empty_name_is_fine_with_an_explicit_path() {
    let file = write_config("[program]\nname = \"\"\npath = \"/opt/zenity/bin/zenity\"\n");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(
        cfg.program.path,
        Some(PathBuf::from("/opt/zenity/bin/zenity"))
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config("[window]\ncolour = \"red\"\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(DialogError::TomlError(_))
    ));
}

#[test]
fn named_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        load_or_default(Some(&missing)),
        Err(DialogError::IoError(_))
    ));
}

#[test]
fn program_override_by_name_clears_path() {
    let mut cfg = ConfigFile::default();
    cfg.program.path = Some(PathBuf::from("/usr/local/bin/zenity"));

    apply_program_override(&mut cfg, "qarma");

    assert_eq!(cfg.program.name, "qarma");
    assert!(cfg.program.path.is_none());
}

#[test]
fn program_override_with_separator_is_a_path() {
    let mut cfg = ConfigFile::default();

    apply_program_override(&mut cfg, "./bin/zenity");

    assert_eq!(cfg.program.path, Some(PathBuf::from("./bin/zenity")));
    assert_eq!(cfg.program.name, "zenity");
}

#[test]
fn blank_override_is_ignored() {
    let mut cfg = ConfigFile::default();
    apply_program_override(&mut cfg, "   ");
    assert_eq!(cfg.program.name, "zenity");
    assert!(cfg.program.path.is_none());
}
