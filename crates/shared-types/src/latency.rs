use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`Latency::wait`].
pub type LatencyFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Injection point for the portal's simulated delays.
///
/// The UI supplies a timer-backed implementation; tests use [`NoLatency`]
/// so simulated work completes on the first poll.
pub trait Latency {
    fn wait(&self, duration: Duration) -> LatencyFuture;
}

/// Completes immediately regardless of the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn wait(&self, _duration: Duration) -> LatencyFuture {
        Box::pin(std::future::ready(()))
    }
}

/// Records each requested duration and completes immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingLatency {
    waits: std::rc::Rc<std::cell::RefCell<Vec<Duration>>>,
}

impl RecordingLatency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

impl Latency for RecordingLatency {
    fn wait(&self, duration: Duration) -> LatencyFuture {
        self.waits.borrow_mut().push(duration);
        Box::pin(std::future::ready(()))
    }
}
