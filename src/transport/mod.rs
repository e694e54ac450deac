/*
 *  The two external boundaries: asking an agent for its reply, and
 *  persisting the ledger. The core judge only ever talks to these traits;
 *  `process` and `json_ledger` are default, concrete implementations that
 *  make the crate runnable as a CLI binary.
 */

pub(crate) mod json_ledger;
pub(crate) mod process;

use std::time::Duration;

pub use json_ledger::JsonLedgerSink;
pub use process::JudgeProcessChannel;

use crate::world::prelude::Snapshot;

/// Asks one agent for its reply to an input string. Never fails: every
/// failure mode (timeout, nonzero exit, missing output) degrades to an
/// empty string — there is nothing left for a caller to handle.
pub trait AgentChannel {
    fn ask(&mut self, agent_index: usize, input: &str, timeout: Duration) -> String;
}

/// Accepts per-phase snapshots and persists them once the match ends.
pub trait LedgerSink {
    fn record(&mut self, snapshot: Snapshot);
    fn finish(self: Box<Self>) -> anyhow::Result<()>;
}
