//! Cross-thread invocation against a channel-backed stand-in event loop.
//!
//! Every blocking call runs under `within`, so a lost wake-up fails the
//! test instead of hanging it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use webframe::bridge::invoke::{Dispatcher, Task, TaskSink};
use webframe::types::errors::DispatchError;

const DEADLINE: Duration = Duration::from_secs(5);

#[derive(Default)]
struct Counter {
    value: u64,
    ran_on: Option<thread::ThreadId>,
}

struct ChannelSink(Mutex<Sender<Task<Counter>>>);

impl TaskSink<Counter> for ChannelSink {
    fn post(&self, task: Task<Counter>) -> Result<(), DispatchError> {
        self.0
            .lock()
            .unwrap()
            .send(task)
            .map_err(|_| DispatchError::EventLoopClosed)
    }
}

/// Spawns a thread that owns a `Counter` and runs every posted task on it.
/// The handle returns the final counter once every sender is gone.
fn spawn_loop() -> (Dispatcher<Counter>, JoinHandle<Counter>) {
    let (tx, rx) = mpsc::channel::<Task<Counter>>();
    let handle = thread::spawn(move || {
        let mut counter = Counter::default();
        for task in rx {
            task(&mut counter);
        }
        counter
    });
    let loop_thread = handle.thread().id();
    let dispatcher = Dispatcher::new(Arc::new(ChannelSink(Mutex::new(tx))), loop_thread);
    (dispatcher, handle)
}

/// Runs `f` on a helper thread and fails if it has not returned by `DEADLINE`.
fn within<R, F>(f: F) -> R
where
    R: Send + 'static,
    F: FnOnce() -> R + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(DEADLINE)
        .expect("blocking call did not return before the deadline")
}

#[test]
fn invoke_returns_after_task_has_run() {
    let (dispatcher, handle) = spawn_loop();
    let seen = Arc::new(AtomicUsize::new(0));

    let flag = Arc::clone(&seen);
    let caller = dispatcher.clone();
    let result = within(move || {
        caller.invoke(move |counter| {
            thread::sleep(Duration::from_millis(30));
            counter.value += 1;
            counter.ran_on = Some(thread::current().id());
            flag.store(1, Ordering::SeqCst);
        })
    });
    assert_eq!(result, Ok(()));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    let loop_thread = dispatcher.loop_thread();
    drop(dispatcher);
    let counter = handle.join().unwrap();
    assert_eq!(counter.value, 1);
    assert_eq!(counter.ran_on, Some(loop_thread));
}

#[test]
fn invoke_from_loop_thread_is_refused() {
    let (dispatcher, handle) = spawn_loop();
    let inner = dispatcher.clone();
    let (result_tx, result_rx) = mpsc::channel();

    dispatcher
        .post(move |_counter| {
            result_tx.send(inner.invoke(|c| c.value += 1)).unwrap();
        })
        .unwrap();

    assert_eq!(
        result_rx.recv_timeout(DEADLINE).unwrap(),
        Err(DispatchError::CalledFromEventLoop)
    );
    drop(dispatcher);
    assert_eq!(handle.join().unwrap().value, 0);
}

#[test]
fn invoke_after_loop_exit_reports_closed() {
    let (tx, rx) = mpsc::channel::<Task<Counter>>();
    let handle = thread::spawn(move || drop(rx));
    let loop_thread = handle.thread().id();
    handle.join().unwrap();

    let dispatcher = Dispatcher::new(Arc::new(ChannelSink(Mutex::new(tx))), loop_thread);
    assert_eq!(
        within(move || dispatcher.invoke(|c| c.value += 1)),
        Err(DispatchError::EventLoopClosed)
    );
}

#[test]
fn concurrent_invokers_each_complete() {
    let (dispatcher, handle) = spawn_loop();

    let caller = dispatcher.clone();
    within(move || {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let dispatcher = caller.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        dispatcher.invoke(|c| c.value += 1).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
    });

    drop(dispatcher);
    assert_eq!(handle.join().unwrap().value, 200);
}

#[test]
fn post_does_not_wait() {
    let (dispatcher, handle) = spawn_loop();
    let (gate_tx, gate_rx) = mpsc::channel::<()>();

    dispatcher
        .post(move |c| {
            gate_rx.recv().unwrap();
            c.value += 10;
        })
        .unwrap();
    // The task is still parked on the gate, yet post has returned.
    gate_tx.send(()).unwrap();

    drop(dispatcher);
    assert_eq!(handle.join().unwrap().value, 10);
}

#[test]
fn task_dropped_by_loop_releases_caller() {
    let (tx, rx) = mpsc::channel::<Task<Counter>>();
    let handle = thread::spawn(move || {
        // Shuts down with the first task still queued.
        let first = rx.recv().unwrap();
        drop(first);
    });
    let dispatcher = Dispatcher::new(
        Arc::new(ChannelSink(Mutex::new(tx))),
        handle.thread().id(),
    );

    assert_eq!(
        within(move || dispatcher.invoke(|c| c.value += 1)),
        Err(DispatchError::Abandoned)
    );
    handle.join().unwrap();
}

#[test]
fn panicking_task_is_reported_when_loop_catches_it() {
    let (tx, rx) = mpsc::channel::<Task<Counter>>();
    let handle = thread::spawn(move || {
        let mut counter = Counter::default();
        for task in rx {
            let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| task(&mut counter)));
        }
    });
    let dispatcher = Dispatcher::new(
        Arc::new(ChannelSink(Mutex::new(tx))),
        handle.thread().id(),
    );

    let caller = dispatcher.clone();
    let results = within(move || {
        (
            caller.invoke(|_c| panic!("boom")),
            caller.invoke(|c| c.value += 1),
        )
    });
    assert_eq!(results, (Err(DispatchError::Abandoned), Ok(())));

    drop(dispatcher);
    handle.join().unwrap();
}
