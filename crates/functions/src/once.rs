//! Run a function at most one time.
//!
//! A `Once` is a two-state machine. It starts unfired holding the wrapped
//! function. The first call consumes the function, records its result and
//! moves to fired; every later call returns the recorded result. Fired is
//! permanent.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fmt;
use tracing::trace;
use underbar_core::{Error, Result};

/// Wrap `func` so it runs at most one time.
pub fn once<F, R>(func: F) -> Once<F, R> {
    Once::new(func)
}

/// A function that runs on its first call and replays that result afterwards.
pub struct Once<F, R> {
    func: Mutex<Option<F>>,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    /// Create an unfired guard around `func`
    pub fn new(func: F) -> Self {
        Self {
            func: Mutex::new(Some(func)),
            result: OnceCell::new(),
        }
    }

    /// Call the wrapped function the first time, replay its result afterwards.
    ///
    /// Arguments given after the first call are ignored. Concurrent first
    /// calls block until the single invocation finishes. If that invocation
    /// panics, the panic propagates and every later call returns
    /// [`Error::Poisoned`].
    pub fn call<A>(&self, args: A) -> Result<&R>
    where
        F: FnOnce(A) -> R,
    {
        if let Some(result) = self.result.get() {
            trace!("once already fired, replaying result");
            return Ok(result);
        }

        self.result.get_or_try_init(|| {
            let func = self.func.lock().take().ok_or_else(|| Error::poisoned("once"))?;
            trace!("once firing");
            Ok(func(args))
        })
    }

    /// Whether the wrapped function has been invoked
    pub fn has_fired(&self) -> bool {
        self.func.lock().is_none()
    }

    /// The recorded result, without firing
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("fired", &self.has_fired())
            .field("result", &self.result.get())
            .finish()
    }
}
