// tests/feeder.rs

use std::time::Duration;

use tokio::io::{AsyncReadExt, duplex};
use zdialog::exec::{FeedEnd, Feeder, feed_channel};
use zdialog_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn values_are_written_in_order_as_lines() {
    init_tracing();
    let (writer, mut reader) = duplex(64);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    for v in [0, 1, 42, 99, 100] {
        tx.send(v).unwrap();
    }
    drop(tx);

    let mut seen = String::new();
    with_timeout(reader.read_to_string(&mut seen)).await.unwrap();
    let report = with_timeout(feeder.join()).await.unwrap();

    assert_eq!(seen, "0\n1\n42\n99\n100\n");
    assert_eq!(report.written, 5);
    assert_eq!(report.end, FeedEnd::ChannelClosed);
}

#[tokio::test]
async fn closing_feed_without_values_closes_pipe() {
    init_tracing();
    let (writer, mut reader) = duplex(64);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    drop(tx);

    let mut seen = Vec::new();
    let n = with_timeout(reader.read_to_end(&mut seen)).await.unwrap();
    assert_eq!(n, 0, "reader should see EOF immediately");

    let report = with_timeout(feeder.join()).await.unwrap();
    assert_eq!(report.written, 0);
    assert_eq!(report.end, FeedEnd::ChannelClosed);
}

#[tokio::test]
async fn vanished_reader_stops_the_loop_without_error() {
    init_tracing();
    let (writer, reader) = duplex(64);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    drop(reader);
    tx.send(10).unwrap();
    tx.send(20).unwrap();

    let report = with_timeout(feeder.join()).await.unwrap();
    assert_eq!(report.end, FeedEnd::PipeClosed);
    assert_eq!(report.written, 0);

    // The feed is gone with the loop; sending just fails.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(tx.send(30).is_err());
}

#[tokio::test]
async fn finish_stops_a_feed_that_is_still_open() {
    init_tracing();
    let (writer, mut reader) = duplex(64);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    tx.send(5).unwrap();
    let mut buf = [0u8; 2];
    with_timeout(reader.read_exact(&mut buf)).await.unwrap();
    assert_eq!(&buf, b"5\n");

    // Caller never closes `tx`; the process exiting must still end the loop.
    let report = with_timeout(feeder.finish()).await.unwrap();
    assert_eq!(report.end, FeedEnd::ProcessExited);
    assert_eq!(report.written, 1);
    assert!(tx.send(6).is_err());
}

#[tokio::test]
async fn dropping_the_handle_ends_the_loop() {
    init_tracing();
    let (writer, mut reader) = duplex(64);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    drop(feeder);

    // The loop drops the writer when it ends, so the reader reaches EOF even
    // though the feed is still open.
    let mut seen = Vec::new();
    with_timeout(reader.read_to_end(&mut seen)).await.unwrap();
    assert!(seen.is_empty());
    drop(tx);
}

#[tokio::test]
async fn slow_reader_applies_backpressure_but_loses_nothing() {
    init_tracing();
    // Tiny buffer forces the writer to wait on the reader.
    let (writer, mut reader) = duplex(4);
    let (tx, rx) = feed_channel();
    let feeder = Feeder::spawn(writer, rx);

    for v in 0..=100 {
        tx.send(v).unwrap();
    }
    drop(tx);

    let mut seen = String::new();
    with_timeout(reader.read_to_string(&mut seen)).await.unwrap();
    let report = with_timeout(feeder.join()).await.unwrap();

    let expected: String = (0..=100).map(|v| format!("{v}\n")).collect();
    assert_eq!(seen, expected);
    assert_eq!(report.written, 101);
}
