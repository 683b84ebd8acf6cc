// tests/output_parsing.rs

use zdialog::dialogs::ScaleArgs;
use zdialog::dialogs::parse::{parse_scale_value, split_credentials, split_list};
use zdialog::errors::DialogError;
use zdialog::exec::feed_channel;
use zdialog_test_utils::{FakeBackend, fake_dialogs, init_tracing, with_timeout};

#[test]
fn split_list_on_pipe() {
    assert_eq!(split_list("file1|file2"), vec!["file1", "file2"]);
}

/// An empty answer still yields one (empty) element. Callers that want "no
/// files" must check for it themselves.
#[test]
fn split_list_of_empty_output_is_single_empty_element() {
    assert_eq!(split_list(""), vec![String::new()]);
}

#[test]
fn split_list_keeps_empty_segments() {
    assert_eq!(split_list("a||b|"), vec!["a", "", "b", ""]);
}

#[tokio::test]
async fn declined_file_selection_yields_single_empty_element() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond(1, ""));

    let files = dialogs
        .file_selection("Choose", &Default::default())
        .await
        .unwrap();

    assert_eq!(files, vec![String::new()]);
}

#[test]
fn scale_value_parsing() {
    assert_eq!(parse_scale_value("23").unwrap(), 23);
    assert_eq!(parse_scale_value(" 7\n").unwrap(), 7);
    assert_eq!(parse_scale_value("-4").unwrap(), -4);
    assert_eq!(parse_scale_value("").unwrap(), -1);
}

#[test]
fn scale_value_rejects_garbage() {
    match parse_scale_value("twenty") {
        Err(DialogError::InvalidOutput { output, .. }) => assert_eq!(output, "twenty"),
        other => panic!("expected InvalidOutput, got {other:?}"),
    }
}

#[test]
fn credentials_parsing() {
    assert_eq!(
        split_credentials("user|hunter2").unwrap(),
        ("user".to_string(), "hunter2".to_string())
    );
    assert_eq!(
        split_credentials("").unwrap(),
        (String::new(), String::new())
    );
    assert!(matches!(
        split_credentials("no-separator"),
        Err(DialogError::InvalidOutput { .. })
    ));
}

#[tokio::test]
async fn scale_answer_is_typed() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond(0, "23\n").respond(0, ""));
    let args = ScaleArgs {
        initial: 30,
        min: 0,
        max: 100,
        step: 1,
        partial: None,
    };

    assert_eq!(dialogs.scale("Select a value", args.clone()).await.unwrap(), 23);
    assert_eq!(dialogs.scale("Select a value", args).await.unwrap(), -1);
}

#[tokio::test]
async fn declined_scale_is_no_value() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond(1, ""));

    assert_eq!(
        dialogs.scale("Select", ScaleArgs::default()).await.unwrap(),
        -1
    );
}

#[tokio::test]
async fn partial_scale_forwards_values_and_answers_last() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond_partial(0, &[10, 20, 35]));
    let (tx, mut rx) = feed_channel();
    let args = ScaleArgs {
        partial: Some(tx),
        ..ScaleArgs::default()
    };

    let answer = dialogs.scale("Slide", args).await.unwrap();
    assert_eq!(answer, 35);

    let mut seen = Vec::new();
    while let Some(v) = with_timeout(rx.recv()).await {
        seen.push(v);
    }
    assert_eq!(seen, vec![10, 20, 35]);
    assert!(
        dialogs
            .invoker()
            .backend()
            .last_args()
            .contains(&"--print-partial".to_string())
    );
}

#[tokio::test]
async fn partial_scale_without_values_is_no_value() {
    init_tracing();
    let dialogs = fake_dialogs(FakeBackend::new().respond_partial(0, &[]));
    let (tx, _rx) = feed_channel();
    let args = ScaleArgs {
        partial: Some(tx),
        ..ScaleArgs::default()
    };

    assert_eq!(dialogs.scale("Slide", args).await.unwrap(), -1);
}
