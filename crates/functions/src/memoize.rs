//! Cache a function's results by argument

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

/// Wrap `func` so it runs at most once per distinct argument.
pub fn memoize<A, R, F>(func: F) -> Memoized<A, R, F>
where
    A: Eq + Hash,
    F: Fn(A) -> R,
{
    Memoized::new(func)
}

/// A function whose results are cached by argument.
///
/// The cache grows for as long as the `Memoized` value lives and is never
/// evicted. The wrapped function is assumed to be pure.
///
/// Each argument gets its own initialization cell, so concurrent calls with
/// the same argument wait for a single invocation while calls with different
/// arguments compute in parallel. A wrapped function must not call its own
/// `Memoized` with the argument it is computing; that call would never return.
pub struct Memoized<A, R, F> {
    func: F,
    cache: DashMap<A, Arc<OnceCell<R>>>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash,
{
    /// Create a memoized wrapper with an empty cache
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: DashMap::new(),
        }
    }

    /// Return the cached result for `arg`, computing and storing it on a miss.
    pub fn call(&self, arg: A) -> R
    where
        A: Clone,
        R: Clone,
        F: Fn(A) -> R,
    {
        let cell = Arc::clone(&self.cache.entry(arg.clone()).or_default());

        let mut computed = false;
        let result = cell.get_or_init(|| {
            computed = true;
            (self.func)(arg)
        });

        if computed {
            trace!(entries = self.cache.len(), "memoize cache miss");
        } else {
            trace!("memoize cache hit");
        }

        result.clone()
    }

    /// Whether a result for `arg` has been computed
    pub fn is_cached(&self, arg: &A) -> bool {
        self.cache
            .get(arg)
            .is_some_and(|entry| entry.value().get().is_some())
    }

    /// Number of arguments seen so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F>
where
    A: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}
