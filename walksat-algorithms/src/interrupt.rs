use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// Polled by the search driver before every step. Returning `true` ends the
/// solve with [`crate::SolveStatus::Interrupted`].
pub trait Interrupt: Sync {
    fn should_stop(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl Interrupt for NoInterrupt {
    fn should_stop(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Deadline(pub Instant);

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Deadline(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    fn should_stop(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// Cancellation shared between the solving thread and whoever may abort it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancelFlag {
    fn should_stop(&self) -> bool {
        self.is_cancelled()
    }
}
