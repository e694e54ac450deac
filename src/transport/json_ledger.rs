use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;

use crate::transport::LedgerSink;
use crate::world::prelude::Snapshot;

/// Accumulates snapshots and, on `finish`, writes the whole ledger array
/// to the `--output` path as pretty-printed JSON.
pub struct JsonLedgerSink {
    output_path: PathBuf,
    snapshots: Vec<Snapshot>,
}

impl JsonLedgerSink {
    pub fn new(output_path: PathBuf) -> JsonLedgerSink {
        JsonLedgerSink {
            output_path,
            snapshots: vec![],
        }
    }
}

impl LedgerSink for JsonLedgerSink {
    fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    fn finish(self: Box<Self>) -> anyhow::Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating ledger directory {}", parent.display()))?;
            }
        }
        let file = File::create(&self.output_path)
            .with_context(|| format!("creating ledger file {}", self.output_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.snapshots)
            .context("serializing ledger")?;
        Ok(())
    }
}
