// settle.rs - Wait for a set of images to reach a terminal state
//
// Loaded and failed both count as settled. A broken asset never
// holds back the reveal.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Counts of settled images. `failed` is a subset of `settled`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleReport {
    pub settled: usize,
    pub failed: usize,
}

impl SettleReport {
    pub fn record(&mut self, outcome: ImageOutcome) {
        self.settled += 1;
        if outcome == ImageOutcome::Failed {
            self.failed += 1;
        }
    }

    /// Images that reached a terminal state, loaded or not.
    pub fn total(&self) -> usize {
        self.settled
    }

    pub fn loaded(&self) -> usize {
        self.settled - self.failed
    }
}

/// Resolve once every load future has produced an outcome.
/// An empty set resolves immediately.
pub async fn settle_all<I, F>(loads: I) -> SettleReport
where
    I: IntoIterator<Item = F>,
    F: Future<Output = ImageOutcome>,
{
    let mut pending: FuturesUnordered<F> = loads.into_iter().collect();
    let total = pending.len();
    let mut report = SettleReport::default();

    while let Some(outcome) = pending.next().await {
        report.record(outcome);
        log::debug!("image settled {}/{} ({:?})", report.settled, total, outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    #[test]
    fn empty_set_is_settled() {
        let report = block_on(settle_all(Vec::<futures::future::Ready<ImageOutcome>>::new()));
        assert_eq!(report, SettleReport::default());
    }

    #[test]
    fn failures_count_as_settled() {
        let loads = [
            ImageOutcome::Loaded,
            ImageOutcome::Failed,
            ImageOutcome::Loaded,
        ]
        .map(ready);

        let report = block_on(settle_all(loads));
        assert_eq!(report.settled, 3);
        assert_eq!(report.failed, 1);
        assert_eq!(report.loaded(), 2);
        assert_eq!(report.total(), 3);
    }
}
