use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// `Breaker` is used for aborting hashing runs. The pipeline checks the state of the
/// breaker at each chunk boundary; an aborted run fails with an abort error instead of
/// producing a digest. Take into account, in the scope of usage with `Session`, starting
/// a new run resets the state of `Breaker` to its initial state.
///
/// Cloning: An instance of `Breaker` can be cloned; the cloned instance will be bound with
/// the parent instance. `Breaker` is safe to be shared between threads.
#[derive(Default, Debug, Clone)]
pub struct Breaker {
    state: Arc<AtomicBool>,
}

impl Breaker {
    /// Creates a new instance of `Breaker`.
    ///
    /// # Returns
    ///
    /// - A new `Breaker` instance.
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resets the instance of `Breaker` to its initial state.
    ///
    /// This method is used internally within the `Session` when a new run starts.
    pub(crate) fn reset(&mut self) {
        self.state.store(false, Ordering::SeqCst)
    }

    /// Checks if an abort has been requested.
    ///
    /// # Returns
    ///
    /// - `true` if the operation has been aborted, `false` otherwise.
    pub fn is_aborted(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    /// Aborts the operation by setting the internal state to `true`.
    pub fn abort(&self) {
        self.state.store(true, Ordering::SeqCst)
    }
}
