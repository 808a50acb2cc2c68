use std::sync::{Condvar, Mutex, PoisonError};

/// Binary wake-up signal owned by one render worker.
///
/// `post` raises the flag and `wait` blocks until it is raised, then lowers
/// it. Posting an already raised gate changes nothing, so any number of posts
/// between two waits release exactly one pass.
#[derive(Debug, Default)]
pub struct RenderGate {
    posted: Mutex<bool>,
    wake: Condvar,
}

impl RenderGate {
    #[must_use]
    pub fn new(posted: bool) -> Self {
        Self {
            posted: Mutex::new(posted),
            wake: Condvar::new(),
        }
    }

    pub fn post(&self) {
        // A bool cannot be left half-written, so a poisoned lock is still usable.
        let mut posted = self.posted.lock().unwrap_or_else(PoisonError::into_inner);
        *posted = true;
        self.wake.notify_one();
    }

    pub fn wait(&self) {
        let mut posted = self.posted.lock().unwrap_or_else(PoisonError::into_inner);

        while !*posted {
            posted = self
                .wake
                .wait(posted)
                .unwrap_or_else(PoisonError::into_inner);
        }

        *posted = false;
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_posted(&self) -> bool {
        *self.posted.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
