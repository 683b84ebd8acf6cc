// tests/text_info_validation.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use zdialog::dialogs::TextInfoArgs;
use zdialog::errors::DialogError;
use zdialog_test_utils::{FakeBackend, fake_dialogs, init_tracing};

#[test]
fn no_source_is_a_configuration_error() {
    let args = TextInfoArgs {
        editable: true,
        ..Default::default()
    };

    let err = args.parse().unwrap_err();
    assert!(matches!(err, DialogError::MissingTextSource));
    assert_eq!(
        err.to_string(),
        "one of filename, text or URL needs to be supplied"
    );
}

#[test]
fn empty_strings_do_not_count_as_sources() {
    let args = TextInfoArgs {
        text: Some(String::new()),
        url: Some(String::new()),
        ..Default::default()
    };

    assert!(matches!(args.parse(), Err(DialogError::MissingTextSource)));
}

#[test]
fn two_sources_conflict() {
    let args = TextInfoArgs {
        editable: true,
        text: Some("Hello, worldly\nworlded world.".to_string()),
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };

    let err = args.parse().unwrap_err();
    assert!(matches!(err, DialogError::ConflictingTextSources));
    assert_eq!(
        err.to_string(),
        "only one of filename, text and URL can be supplied"
    );
}

#[test]
fn three_sources_conflict() {
    let file = NamedTempFile::new().unwrap();
    let args = TextInfoArgs {
        filename: Some(file.path().to_path_buf()),
        text: Some("inline".to_string()),
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        args.parse(),
        Err(DialogError::ConflictingTextSources)
    ));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("foobar.txt");
    let args = TextInfoArgs {
        filename: Some(missing.clone()),
        ..Default::default()
    };

    match args.parse() {
        Err(DialogError::FileUnavailable { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileUnavailable, got {other:?}"),
    }
}

#[test]
fn existing_file_renders_arguments() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Hello, world!").unwrap();
    let args = TextInfoArgs {
        checkbox: Some("Agree?".to_string()),
        editable: true,
        filename: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert_eq!(
        args.parse().unwrap(),
        vec![
            "--checkbox".to_string(),
            "Agree?".to_string(),
            "--editable".to_string(),
            "--filename".to_string(),
            file.path().display().to_string(),
        ]
    );
}

#[test]
fn url_renders_as_html() {
    let args = TextInfoArgs {
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };

    assert_eq!(
        args.parse().unwrap(),
        vec!["--html", "--url", "https://example.com"]
    );
}

#[tokio::test]
async fn validation_failures_never_launch_the_dialog() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new());

    let none = TextInfoArgs::default();
    assert!(dialogs.text_info("Read", &none).await.is_err());

    let missing = TextInfoArgs {
        filename: Some(PathBuf::from("/definitely/not/here.txt")),
        ..Default::default()
    };
    assert!(matches!(
        dialogs.text_info("Read", &missing).await,
        Err(DialogError::FileUnavailable { .. })
    ));

    assert!(dialogs.invoker().backend().calls().is_empty());
}

#[tokio::test]
async fn inline_text_goes_to_stdin_and_output_is_untrimmed() {
    init_tracing();
    let text = "Hello, worldly\nworlded world.";
    let dialogs = fake_dialogs(FakeBackend::new().respond(0, "Hello, worldly\nworlded world.\n"));
    let args = TextInfoArgs {
        editable: true,
        text: Some(text.to_string()),
        ..Default::default()
    };

    let out = dialogs.text_info("Edit", &args).await.unwrap();
    assert_eq!(out, "Hello, worldly\nworlded world.\n");

    let calls = dialogs.invoker().backend().calls();
    assert_eq!(calls[0].input.as_deref(), Some(text));
    assert!(!calls[0].args.iter().any(|a| a == text));
}

#[tokio::test]
async fn declined_text_info_is_empty() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond(1, ""));
    let args = TextInfoArgs {
        text: Some("terms".to_string()),
        checkbox: Some("I agree".to_string()),
        ..Default::default()
    };

    assert_eq!(dialogs.text_info("Terms", &args).await.unwrap(), "");
}
