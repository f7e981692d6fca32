use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Flags {
    done: AtomicBool,
    evaluated: AtomicBool,
}

/// Completion flag for one asynchronous script evaluation.
///
/// The evaluation callback owns a `ScriptResolver`; the event-loop thread
/// waits with `wait_with`, pumping its own loop so the callback can fire.
/// An engine that discards the callback without calling it still settles
/// the completion, because dropping the resolver does.
#[derive(Debug, Clone, Default)]
pub struct ScriptCompletion {
    flags: Arc<Flags>,
}

/// The callback half of a `ScriptCompletion`.
#[derive(Debug)]
pub struct ScriptResolver {
    flags: Arc<Flags>,
}

impl ScriptCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver(&self) -> ScriptResolver {
        ScriptResolver {
            flags: Arc::clone(&self.flags),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.flags.done.load(Ordering::Acquire)
    }

    /// False when the completion was settled by dropping the callback
    /// rather than by the engine reporting an evaluation.
    pub fn was_evaluated(&self) -> bool {
        self.flags.evaluated.load(Ordering::Acquire)
    }

    /// Calls `pump` until the completion settles. Returns the number of
    /// pump iterations.
    pub fn wait_with<P: FnMut()>(&self, mut pump: P) -> usize {
        let mut iterations = 0;
        while !self.is_complete() {
            pump();
            iterations += 1;
        }
        iterations
    }
}

impl ScriptResolver {
    /// Marks the script as evaluated.
    pub fn resolve(&self) {
        self.flags.evaluated.store(true, Ordering::Release);
        self.flags.done.store(true, Ordering::Release);
    }
}

impl Drop for ScriptResolver {
    fn drop(&mut self) {
        self.flags.done.store(true, Ordering::Release);
    }
}
