// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invoker`] builds requests and turns exit codes into [`Outcome`]s.
//! - [`backend`] is the `DialogBackend` seam; [`process`] is the real
//!   implementation on top of `tokio::process`.
//! - [`feeder`] relays a feed channel into a dialog's stdin (progress).
//! - [`partial`] relays a dialog's stdout into a feed channel (live scale).
//! - [`outcome`] holds the exit-code contract.

pub mod backend;
pub mod feeder;
pub mod invoker;
pub mod outcome;
pub mod partial;
pub mod process;

pub use backend::{BackendFuture, DialogBackend};
pub use feeder::{FeedEnd, FeedReceiver, FeedReport, FeedSender, Feeder, feed_channel};
pub use invoker::Invoker;
pub use outcome::{Completion, DECLINED_EXIT_CODE, Outcome};
pub use partial::{PartialReport, spawn_partial_reader};
pub use process::ProcessBackend;
