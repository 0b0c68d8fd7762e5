// gate/ - Preload gate
//
// Keeps the page masked until every image has settled, then waits a
// short grace period and clears the loading state.
//
//   settle_all(images) -> grace sleep -> LoadingState::unmask()
//
// Both steps run inside one abortable future: cancelling before the
// images settle means the grace sleep is never scheduled.

mod settle;
mod timer;

pub use settle::{settle_all, ImageOutcome, SettleReport};
pub use timer::Timer;

use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle, FutureExt, LocalBoxFuture};

use crate::state::LoadingState;

pub const DEFAULT_GRACE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Revealed(SettleReport),
    Cancelled,
}

pub struct PreloadGate<T> {
    timer: T,
    grace: Duration,
    state: LoadingState,
}

impl<T: Timer + Clone + 'static> PreloadGate<T> {
    pub fn new(timer: T, grace: Duration, state: LoadingState) -> Self {
        Self { timer, grace, state }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Start waiting on `loads`. The returned future drives the gate; the
    /// handle cancels it. Loads are collected here, at mount time.
    pub fn mount<I, F>(&self, loads: I) -> (LocalBoxFuture<'static, GateOutcome>, GateHandle)
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = ImageOutcome> + 'static,
    {
        let loads: Vec<F> = loads.into_iter().collect();
        let timer = self.timer.clone();
        let state = self.state.clone();
        let grace = self.grace;

        let work = async move {
            let report = settle_all(loads).await;
            log::debug!(
                "{} images settled ({} failed), grace {}ms",
                report.settled,
                report.failed,
                grace.as_millis()
            );

            timer.sleep(grace).await;

            if state.unmask() {
                log::info!("page revealed");
            }
            report
        };

        let (work, abort) = abortable(work);
        let gate = async move {
            match work.await {
                Ok(report) => GateOutcome::Revealed(report),
                Err(_) => GateOutcome::Cancelled,
            }
        };

        (gate.boxed_local(), GateHandle { abort })
    }
}

/// Cancels the gate it came from when cancelled or dropped.
pub struct GateHandle {
    abort: AbortHandle,
}

impl GateHandle {
    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            log::debug!("preload gate cancelled");
            self.abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for GateHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns at most one mounted gate. Mounting again cancels the previous
/// mount first, so re-renders never stack timers.
pub struct Preloader<T> {
    gate: PreloadGate<T>,
    active: Option<GateHandle>,
}

impl<T: Timer + Clone + 'static> Preloader<T> {
    pub fn new(gate: PreloadGate<T>) -> Self {
        Self { gate, active: None }
    }

    pub fn mount<I, F>(&mut self, loads: I) -> LocalBoxFuture<'static, GateOutcome>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = ImageOutcome> + 'static,
    {
        self.unmount();
        let (gate, handle) = self.gate.mount(loads);
        self.active = Some(handle);
        gate
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> &LoadingState {
        self.gate.state()
    }
}
