// timer.rs - Sleep source for the grace period
//
// The browser uses gloo timeouts, tests use tokio's paused clock.

use std::future::Future;
use std::time::Duration;

pub trait Timer {
    type Sleep: Future<Output = ()> + 'static;

    fn sleep(&self, duration: Duration) -> Self::Sleep;
}
