use std::collections::VecDeque;
use std::sync::Mutex;

use zdialog::config::WindowSection;
use zdialog::dialogs::Dialogs;
use zdialog::exec::{
    BackendFuture, Completion, DialogBackend, FeedEnd, FeedReceiver, FeedReport, FeedSender,
    Invoker, PartialReport,
};
use zdialog::program::Program;
use zdialog::request::DialogRequest;

/// What a fake dialog "did" when it ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedCall {
    /// Arguments after the program path.
    pub args: Vec<String>,
    /// Text passed on stdin, for `run`.
    pub input: Option<String>,
    /// Values drained from the feed, for `run_fed`.
    pub fed: Vec<i32>,
}

/// A backend that never spawns anything:
/// - answers each call with the next scripted completion (exit 0 with empty
///   output once the script runs out)
/// - records every request it sees
/// - drains feeds until the caller closes them
/// - replays scripted partial values into the sink
#[derive(Debug, Default)]
pub struct FakeBackend {
    script: Mutex<VecDeque<(Completion, Vec<i32>)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completion with the given exit code and stdout.
    pub fn respond(self, code: i32, stdout: &str) -> Self {
        self.push(Completion::exited(code, stdout), Vec::new());
        self
    }

    /// Queue a completion that died from a signal (no exit code).
    pub fn respond_killed(self) -> Self {
        self.push(Completion::default(), Vec::new());
        self
    }

    /// Queue a partial-output dialog printing `values`, then exiting with
    /// `code`.
    pub fn respond_partial(self, code: i32, values: &[i32]) -> Self {
        let raw: String = values.iter().map(|v| format!("{v}\n")).collect();
        self.push(Completion::exited(code, raw), values.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Arguments of the most recent call.
    pub fn last_args(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|c| c.args.clone())
            .unwrap_or_default()
    }

    fn push(&self, completion: Completion, partial: Vec<i32>) {
        self.script.lock().unwrap().push_back((completion, partial));
    }

    fn next(&self) -> (Completion, Vec<i32>) {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| (Completion::exited(0, ""), Vec::new()))
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DialogBackend for FakeBackend {
    fn run<'a>(
        &'a self,
        request: &'a DialogRequest,
        input: Option<String>,
    ) -> BackendFuture<'a, Completion> {
        Box::pin(async move {
            self.record(RecordedCall {
                args: request.args().to_vec(),
                input,
                fed: Vec::new(),
            });
            Ok(self.next().0)
        })
    }

    fn run_fed<'a>(
        &'a self,
        request: &'a DialogRequest,
        mut feed: FeedReceiver,
    ) -> BackendFuture<'a, (Completion, FeedReport)> {
        Box::pin(async move {
            let mut fed = Vec::new();
            while let Some(v) = feed.recv().await {
                fed.push(v);
            }
            let report = FeedReport {
                written: fed.len(),
                end: FeedEnd::ChannelClosed,
            };
            self.record(RecordedCall {
                args: request.args().to_vec(),
                input: None,
                fed,
            });
            Ok((self.next().0, report))
        })
    }

    fn run_partial<'a>(
        &'a self,
        request: &'a DialogRequest,
        sink: FeedSender,
    ) -> BackendFuture<'a, (Completion, PartialReport)> {
        Box::pin(async move {
            self.record(RecordedCall {
                args: request.args().to_vec(),
                input: None,
                fed: Vec::new(),
            });
            let (completion, values) = self.next();
            for v in &values {
                let _ = sink.send(*v);
            }
            let report = PartialReport {
                values,
                raw: completion.stdout.clone(),
            };
            Ok((completion, report))
        })
    }
}

/// Dialogs wired to `backend`, with a placeholder program path and no window
/// options.
pub fn fake_dialogs(backend: FakeBackend) -> Dialogs<FakeBackend> {
    let program = Program::from_path("/usr/bin/zenity");
    Dialogs::with_invoker(Invoker::with_backend(
        program,
        WindowSection::default(),
        backend,
    ))
}
