// Preload gate timing on tokio's paused clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use carousel_gallery::{
    GateOutcome, ImageOutcome, LoadingState, PreloadGate, Preloader, SettleReport, Timer,
};
use tokio::task::{spawn_local, LocalSet};
use tokio::time::{sleep, Instant, Sleep};

const GRACE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy)]
struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = Sleep;

    fn sleep(&self, duration: Duration) -> Sleep {
        sleep(duration)
    }
}

async fn image(ms: u64, outcome: ImageOutcome) -> ImageOutcome {
    sleep(Duration::from_millis(ms)).await;
    outcome
}

/// Records when (relative to `start`) and how often the mask cleared.
struct Reveal {
    at: Rc<Cell<Option<Duration>>>,
    count: Rc<Cell<usize>>,
    _sub: carousel_gallery::Subscription,
}

fn watch(state: &LoadingState, start: Instant) -> Reveal {
    let at = Rc::new(Cell::new(None));
    let count = Rc::new(Cell::new(0));
    let (a, c) = (at.clone(), count.clone());
    let sub = state.subscribe(move |_| {
        a.set(Some(start.elapsed()));
        c.set(c.get() + 1);
    });
    Reveal { at, count, _sub: sub }
}

#[tokio::test(start_paused = true)]
async fn four_images_reveal_after_grace() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());
    let reveal = watch(&state, Instant::now());

    let (fut, _handle) = gate.mount([25, 50, 75, 100].map(|ms| image(ms, ImageOutcome::Loaded)));
    let outcome = fut.await;

    assert_eq!(outcome, GateOutcome::Revealed(SettleReport { settled: 4, failed: 0 }));
    let at = reveal.at.get().unwrap();
    assert!(at >= Duration::from_millis(100), "revealed too early: {at:?}");
    assert!(at <= Duration::from_millis(100) + GRACE, "revealed too late: {at:?}");
    assert_eq!(reveal.count.get(), 1);
    assert!(!state.is_masked());
}

#[tokio::test(start_paused = true)]
async fn failed_image_does_not_block() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());
    let reveal = watch(&state, Instant::now());

    let loads = [
        image(20, ImageOutcome::Loaded),
        image(40, ImageOutcome::Failed),
        image(60, ImageOutcome::Loaded),
        image(100, ImageOutcome::Loaded),
    ];
    let (fut, _handle) = gate.mount(loads);

    assert_eq!(fut.await, GateOutcome::Revealed(SettleReport { settled: 4, failed: 1 }));
    let at = reveal.at.get().unwrap();
    assert!(at >= Duration::from_millis(100) && at <= Duration::from_millis(100) + GRACE);
}

#[tokio::test(start_paused = true)]
async fn no_images_still_reveals() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());
    let reveal = watch(&state, Instant::now());

    let loads: Vec<std::future::Ready<ImageOutcome>> = Vec::new();
    let (fut, _handle) = gate.mount(loads);

    assert_eq!(fut.await, GateOutcome::Revealed(SettleReport::default()));
    let at = reveal.at.get().unwrap();
    assert!(at >= GRACE && at < GRACE + Duration::from_millis(5), "{at:?}");
}

#[tokio::test(start_paused = true)]
async fn mask_stays_until_grace_elapses() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());

    LocalSet::new()
        .run_until(async move {
            let (fut, _handle) = gate.mount([image(50, ImageOutcome::Loaded)]);
            let task = spawn_local(fut);

            sleep(Duration::from_millis(50) + GRACE - Duration::from_millis(1)).await;
            assert!(state.is_masked());

            task.await.unwrap();
            assert!(!state.is_masked());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn unmount_during_grace_cancels_timer() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());
    let reveal = watch(&state, Instant::now());

    LocalSet::new()
        .run_until(async move {
            let (fut, handle) = gate.mount([image(50, ImageOutcome::Loaded)]);
            let task = spawn_local(fut);

            // Images settled, grace timer pending.
            sleep(Duration::from_millis(100)).await;
            drop(handle);
            assert_eq!(task.await.unwrap(), GateOutcome::Cancelled);

            sleep(Duration::from_secs(10)).await;
        })
        .await;

    assert!(state.is_masked());
    assert_eq!(reveal.count.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_before_settle_skips_grace() {
    let state = LoadingState::new();
    let gate = PreloadGate::new(TokioTimer, GRACE, state.clone());

    LocalSet::new()
        .run_until(async move {
            let (fut, handle) = gate.mount([image(200, ImageOutcome::Loaded)]);
            let task = spawn_local(fut);

            sleep(Duration::from_millis(10)).await;
            handle.cancel();
            assert!(handle.is_cancelled());
            assert_eq!(task.await.unwrap(), GateOutcome::Cancelled);

            sleep(Duration::from_secs(10)).await;
            assert!(state.is_masked());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn remount_cancels_previous_mount() {
    let state = LoadingState::new();
    let mut preloader = Preloader::new(PreloadGate::new(TokioTimer, GRACE, state.clone()));
    let reveal = watch(&state, Instant::now());

    LocalSet::new()
        .run_until(async move {
            let first = spawn_local(preloader.mount([image(50, ImageOutcome::Loaded)]));
            let second = spawn_local(preloader.mount([image(50, ImageOutcome::Loaded)]));
            assert!(preloader.is_mounted());

            assert_eq!(first.await.unwrap(), GateOutcome::Cancelled);
            assert_eq!(
                second.await.unwrap(),
                GateOutcome::Revealed(SettleReport { settled: 1, failed: 0 })
            );

            preloader.unmount();
            assert!(!preloader.is_mounted());
        })
        .await;

    assert_eq!(reveal.count.get(), 1);
    assert_eq!(state.subscriber_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn mount_unmount_twice_leaves_nothing_pending() {
    let state = LoadingState::new();
    let mut preloader = Preloader::new(PreloadGate::new(TokioTimer, GRACE, state.clone()));
    let reveal = watch(&state, Instant::now());

    LocalSet::new()
        .run_until(async move {
            for _ in 0..2 {
                let task = spawn_local(preloader.mount([image(50, ImageOutcome::Loaded)]));
                sleep(Duration::from_millis(60)).await;
                preloader.unmount();
                assert_eq!(task.await.unwrap(), GateOutcome::Cancelled);
            }
            sleep(Duration::from_secs(10)).await;
        })
        .await;

    assert!(state.is_masked());
    assert_eq!(reveal.count.get(), 0);
    assert_eq!(state.subscriber_count(), 1);
}
