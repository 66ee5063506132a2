//! Record counter shown on stderr while the index is built (verbose mode only)

use kdam::{Animation, Bar, BarExt};

use crate::utils::config::ProgressConsts;

/// Counter for an unknown total (shows count and rate, no percentage).
/// Updates are batched so the terminal is refreshed every
/// [`ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE`] records.
pub struct RecordCounter {
    bar: Bar,
    pending: usize,
    batch: usize,
}

impl RecordCounter {
    pub fn new(desc: &'static str) -> Self {
        Self::with_batch(desc, ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE)
    }

    pub fn with_batch(desc: &'static str, batch: usize) -> Self {
        let mut bar = kdam::tqdm!(
            total = 0,
            desc = desc,
            animation = Animation::Classic,
            position = 0,
            unit = " records"
        );
        let _ = bar.refresh();
        Self {
            bar,
            pending: 0,
            batch: batch.max(1),
        }
    }

    /// Count one record; refreshes the display once a full batch is pending.
    pub fn tick(&mut self) {
        self.pending += 1;
        if self.pending >= self.batch {
            let _ = self.bar.update(self.pending);
            self.pending = 0;
        }
    }

    /// Flush the remainder and end the line.
    pub fn finish(mut self) {
        if self.pending > 0 {
            let _ = self.bar.update(self.pending);
        }
        let _ = self.bar.refresh();
        eprintln!();
    }
}
