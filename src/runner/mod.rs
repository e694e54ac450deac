mod options;

use std::time::Duration;

pub use options::Cli;

use crate::transport::{AgentChannel, LedgerSink};
use crate::world::prelude::Judge;

/// Drives the agent-IO loop around a [`Judge`]: Phase 0 once, then Phase N
/// until the match ends, snapshotting to the ledger after each.
pub struct Runner {
    judge: Judge,
    channel: Box<dyn AgentChannel>,
    ledger: Box<dyn LedgerSink>,
    timeout: Duration,
}

impl Runner {
    pub fn new(judge: Judge, channel: Box<dyn AgentChannel>, ledger: Box<dyn LedgerSink>, timeout: Duration) -> Runner {
        Runner {
            judge,
            channel,
            ledger,
            timeout,
        }
    }

    /// Runs the match to completion and persists the ledger.
    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("starting phase 0");
        let replies = self.ask_all();
        self.judge.apply_phase0(&replies);
        self.ledger.record(self.judge.state.snapshot());

        while !self.judge.is_over() {
            log::info!("turn {} ({} moves left)", self.judge.state.turn + 1, self.judge.state.moves_left);
            let replies = self.ask_all();
            self.judge.apply_turn(&replies);
            self.ledger.record(self.judge.state.snapshot());
        }

        log::info!("match complete after {} turns", self.judge.state.turn);
        self.ledger.finish()
    }

    fn ask_all(&mut self) -> [String; 3] {
        std::array::from_fn(|i| {
            let input = self.judge.agent_input(i);
            self.channel.ask(i, &input, self.timeout)
        })
    }
}
