use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::{CounterSpec, CounterState, Easing};

// Default tick interval, roughly one frame at 60 Hz
const TICK_MS: u64 = 16;

/// Receives the formatted text every time a running counter changes value.
///
/// Frames are delivered while the counter's lock is held, so a sink must not
/// call back into the same [`Counter`].
pub trait FrameSink: Send + Sync + 'static {
    fn frame(&self, text: &str, state: CounterState);
}

impl<F> FrameSink for F
where
    F: Fn(&str, CounterState) + Send + Sync + 'static,
{
    fn frame(&self, text: &str, state: CounterState) {
        self(text, state)
    }
}

struct Shared {
    epoch: u64,
    state: CounterState,
    suffix: String,
}

/// Owns one animated counter and the tick thread driving it.
///
/// A run is identified by an epoch. The tick thread only touches the state
/// while holding the lock and only if its epoch is still current, so once
/// [`Counter::cancel`] returns no tick of the old run can land. Dropping the
/// counter cancels it.
pub struct Counter {
    shared: Arc<(Mutex<Shared>, Condvar)>,
    sink: Arc<dyn FrameSink>,
    easing: Easing,
    tick: Duration,
    spec: Option<CounterSpec>,
}

impl Counter {
    pub fn new(sink: impl FrameSink) -> Self {
        Self {
            shared: Arc::new((
                Mutex::new(Shared {
                    epoch: 0,
                    state: CounterState::default(),
                    suffix: String::new(),
                }),
                Condvar::new(),
            )),
            sink: Arc::new(sink),
            easing: Easing::default(),
            tick: Duration::from_millis(TICK_MS),
            spec: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    pub fn spec(&self) -> Option<&CounterSpec> {
        self.spec.as_ref()
    }

    pub fn state(&self) -> CounterState {
        self.lock().state
    }

    pub fn text(&self) -> String {
        let shared = self.lock();
        shared.state.text(&shared.suffix)
    }

    pub fn is_running(&self) -> bool {
        self.lock().state.is_running
    }

    /// Start a new run from 0, cancelling any run in flight first.
    pub fn start(&mut self, spec: CounterSpec) {
        let my_epoch = {
            let mut shared = self.lock();
            shared.epoch = shared.epoch.wrapping_add(1);
            shared.state = CounterState::started();
            shared.suffix = spec.suffix.clone();
            self.sink.frame(&shared.state.text(&shared.suffix), shared.state);
            self.shared.1.notify_all();
            shared.epoch
        };

        debug!(
            target = spec.target,
            duration_ms = spec.duration_ms,
            epoch = my_epoch,
            "counter started"
        );

        self.spec = Some(spec.clone());
        self.spawn_ticks(spec, my_epoch);
    }

    /// Restart only when the target or duration differ from the current run.
    ///
    /// A suffix-only change is applied without restarting and redraws the
    /// current value with the new suffix.
    pub fn retarget(&mut self, spec: CounterSpec) {
        let same_run = self
            .spec
            .as_ref()
            .is_some_and(|c| c.target == spec.target && c.duration_ms == spec.duration_ms);

        if !same_run {
            self.start(spec);
            return;
        }

        let mut shared = self.lock();
        if shared.suffix != spec.suffix {
            shared.suffix = spec.suffix.clone();
            self.sink.frame(&shared.state.text(&shared.suffix), shared.state);
        }
        drop(shared);

        if let Some(current) = &mut self.spec {
            current.suffix = spec.suffix;
        }
    }

    /// Tear down the current run. No tick of that run fires after this
    /// returns, and the next `retarget` starts a fresh run.
    pub fn cancel(&mut self) {
        self.spec = None;
        let mut shared = self.lock();
        shared.epoch = shared.epoch.wrapping_add(1);
        if shared.state.is_running {
            debug!(value = shared.state.display_value, "counter cancelled");
        }
        shared.state.is_running = false;
        self.shared.1.notify_all();
    }

    /// Block until the current run has finished or been cancelled.
    pub fn wait(&self) -> CounterState {
        let (lock, cvar) = &*self.shared;
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = cvar
            .wait_while(guard, |s| s.state.is_running)
            .unwrap_or_else(PoisonError::into_inner);
        guard.state
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_ticks(&self, spec: CounterSpec, my_epoch: u64) {
        let shared = Arc::clone(&self.shared);
        let sink = Arc::clone(&self.sink);
        let easing = self.easing;
        let tick = self.tick;
        let t0 = Instant::now();

        thread::spawn(move || {
            loop {
                {
                    let (lock, cvar) = &*shared;
                    let mut guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
                    if guard.epoch != my_epoch {
                        trace!(epoch = my_epoch, "stale tick thread exiting");
                        break;
                    }

                    let before = guard.state.display_value;
                    let Some(value) = guard.state.tick(&spec, easing, t0.elapsed()) else {
                        break;
                    };

                    if value != before || !guard.state.is_running {
                        sink.frame(&guard.state.text(&guard.suffix), guard.state);
                    }

                    if !guard.state.is_running {
                        debug!(value, epoch = my_epoch, "counter reached target");
                        cvar.notify_all();
                        break;
                    }
                }

                thread::sleep(tick);
            }
        });
    }
}

impl Drop for Counter {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Frames = Arc<Mutex<Vec<String>>>;

    fn recording() -> (Frames, impl FrameSink) {
        let frames: Frames = Arc::new(Mutex::new(Vec::new()));
        let sink_frames = Arc::clone(&frames);
        let sink = move |text: &str, _state: CounterState| {
            sink_frames.lock().unwrap().push(text.to_string());
        };
        (frames, sink)
    }

    fn fast(sink: impl FrameSink) -> Counter {
        Counter::new(sink).with_tick(Duration::from_millis(2))
    }

    #[test]
    fn runs_to_target_and_stops() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(50000, 60, "+"));

        let done = counter.wait();
        assert_eq!(done.display_value, 50000);
        assert!(!done.is_running);
        assert_eq!(counter.text(), "50000+");

        let frames = frames.lock().unwrap();
        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("50000+"));
    }

    #[test]
    fn frames_are_monotonic() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(150, 80, ""));
        counter.wait();

        let values: Vec<i64> = frames
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&150));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let (_frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(500, 0, ""));
        assert_eq!(counter.wait().display_value, 500);
    }

    #[test]
    fn no_frames_after_cancel() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(1_000_000, 5_000, ""));
        thread::sleep(Duration::from_millis(20));
        counter.cancel();

        let seen = frames.lock().unwrap().len();
        let frozen = counter.state();
        thread::sleep(Duration::from_millis(30));

        assert!(!frozen.is_running);
        assert_eq!(frames.lock().unwrap().len(), seen);
        assert_eq!(counter.state(), frozen);
        assert_eq!(counter.wait(), frozen);
    }

    #[test]
    fn retarget_mid_flight_ends_at_new_target() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(100, 5_000, ""));
        thread::sleep(Duration::from_millis(10));
        counter.retarget(CounterSpec::new(200, 40, ""));

        assert_eq!(counter.wait().display_value, 200);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(counter.state().display_value, 200);
        assert_eq!(frames.lock().unwrap().last().map(String::as_str), Some("200"));
    }

    #[test]
    fn retarget_with_same_target_keeps_run() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(10, 60, ""));
        counter.retarget(CounterSpec::new(10, 60, "%"));
        assert_eq!(counter.wait().display_value, 10);
        assert_eq!(counter.text(), "10%");

        let frames = frames.lock().unwrap();
        assert_eq!(frames.first().map(String::as_str), Some("0"));
        assert_eq!(frames.last().map(String::as_str), Some("10%"));
        assert!(frames.iter().filter(|f| f.starts_with("10")).all(|f| f == "10%"));
    }

    #[test]
    fn suffix_change_after_finish_redraws() {
        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(32, 0, ""));
        counter.wait();
        counter.retarget(CounterSpec::new(32, 0, "%"));

        assert!(!counter.is_running());
        assert_eq!(frames.lock().unwrap().last().map(String::as_str), Some("32%"));
    }

    #[test]
    fn retarget_after_cancel_starts_again() {
        let (_frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(100, 5_000, ""));
        thread::sleep(Duration::from_millis(10));
        counter.cancel();
        assert!(counter.spec().is_none());

        counter.retarget(CounterSpec::new(100, 40, ""));
        assert!(counter.spec().is_some());
        assert_eq!(counter.wait().display_value, 100);
    }

    #[test]
    fn fresh_counter_after_drop_starts_clean() {
        let (old_frames, old_sink) = recording();
        let mut old = fast(old_sink);
        old.start(CounterSpec::new(1_000_000, 5_000, ""));
        thread::sleep(Duration::from_millis(10));
        drop(old);
        let old_count = old_frames.lock().unwrap().len();

        let (frames, sink) = recording();
        let mut counter = fast(sink);
        counter.start(CounterSpec::new(100, 30, ""));
        assert_eq!(frames.lock().unwrap().first().map(String::as_str), Some("0"));
        assert_eq!(counter.wait().display_value, 100);

        thread::sleep(Duration::from_millis(10));
        assert_eq!(old_frames.lock().unwrap().len(), old_count);
    }
}
