//! Cross-thread invocation bridge.
//!
//! `Dispatcher::invoke` posts a task onto the event loop and parks the
//! calling thread until that task has run. Each call owns its own
//! rendezvous (`InvokeWaiter`); there is no process-wide lock.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use tracing::{debug, warn};

use crate::types::errors::DispatchError;

/// A unit of work executed on the event-loop thread against its state `T`.
pub type Task<T> = Box<dyn FnOnce(&mut T) + Send + 'static>;

/// Where tasks are queued. The production sink is the window event loop;
/// tests plug in a channel drained by a worker thread.
pub trait TaskSink<T>: Send + Sync {
    fn post(&self, task: Task<T>) -> Result<(), DispatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WaitState {
    Pending,
    Completed,
    Abandoned,
}

struct InvokeWaiter {
    state: Mutex<WaitState>,
    signal: Condvar,
}

impl InvokeWaiter {
    fn new() -> Self {
        Self {
            state: Mutex::new(WaitState::Pending),
            signal: Condvar::new(),
        }
    }

    fn finish(&self, outcome: WaitState) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = outcome;
        drop(state);
        self.signal.notify_one();
    }

    fn wait(&self) -> WaitState {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self
            .signal
            .wait_while(state, |s| *s == WaitState::Pending)
            .unwrap_or_else(PoisonError::into_inner);
        *state
    }
}

/// Moves into the posted task. Dropping it releases the waiting caller,
/// so a task discarded by a shutting-down loop cannot strand it.
struct CompletionGuard {
    waiter: Arc<InvokeWaiter>,
    ran: bool,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let outcome = if self.ran {
            WaitState::Completed
        } else {
            WaitState::Abandoned
        };
        self.waiter.finish(outcome);
    }
}

/// Handle for running code on the event-loop thread from any other thread.
pub struct Dispatcher<T> {
    sink: Arc<dyn TaskSink<T>>,
    loop_thread: ThreadId,
}

impl<T> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            loop_thread: self.loop_thread,
        }
    }
}

impl<T: 'static> Dispatcher<T> {
    /// `loop_thread` is the thread that drains `sink`.
    pub fn new(sink: Arc<dyn TaskSink<T>>, loop_thread: ThreadId) -> Self {
        Self { sink, loop_thread }
    }

    pub fn loop_thread(&self) -> ThreadId {
        self.loop_thread
    }

    pub fn is_loop_thread(&self) -> bool {
        thread::current().id() == self.loop_thread
    }

    /// Runs `f` on the event-loop thread and blocks until it returned.
    ///
    /// Nothing produced by `f` comes back: no value, no panic payload.
    /// There is no timeout; a hung task hangs the caller.
    pub fn invoke<F>(&self, f: F) -> Result<(), DispatchError>
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        if self.is_loop_thread() {
            warn!("invoke called on the event-loop thread; refusing to deadlock");
            return Err(DispatchError::CalledFromEventLoop);
        }

        let waiter = Arc::new(InvokeWaiter::new());
        let guard = CompletionGuard {
            waiter: Arc::clone(&waiter),
            ran: false,
        };

        self.sink.post(Box::new(move |target: &mut T| {
            // Rebind so the closure owns the whole guard, not just `ran`.
            let mut guard = guard;
            f(target);
            guard.ran = true;
        }))?;

        match waiter.wait() {
            WaitState::Completed => {
                debug!("invoke completed");
                Ok(())
            }
            _ => Err(DispatchError::Abandoned),
        }
    }

    /// Queues `f` without waiting. Safe from any thread, including the
    /// event-loop thread.
    pub fn post<F>(&self, f: F) -> Result<(), DispatchError>
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        self.sink.post(Box::new(f))
    }
}
