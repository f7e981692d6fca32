//! Event loop ownership: builds the window host, hands out dispatchers
//! for other threads, and runs the loop.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tracing::{debug, error, info};

use crate::bridge::invoke::{Dispatcher, Task, TaskSink};
use crate::types::errors::{DispatchError, HostError};
use crate::types::init_params::InitParams;
use crate::ui::handlers::WindowHandlers;
use crate::ui::host::WindowHost;

pub enum UserEvent {
    Invoke(Task<WindowHost>),
}

impl fmt::Debug for UserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserEvent::Invoke(_) => f.write_str("Invoke"),
        }
    }
}

/// Posts tasks to the loop as user events.
struct ProxySink {
    proxy: Mutex<EventLoopProxy<UserEvent>>,
}

impl TaskSink<WindowHost> for ProxySink {
    fn post(&self, task: Task<WindowHost>) -> Result<(), DispatchError> {
        self.proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(UserEvent::Invoke(task))
            .map_err(|_| DispatchError::EventLoopClosed)
    }
}

pub struct Runtime {
    event_loop: EventLoop<UserEvent>,
    host: WindowHost,
    dispatcher: Dispatcher<WindowHost>,
}

impl Runtime {
    /// Validates `params` and builds the window synchronously on the
    /// calling thread, which becomes the event-loop thread.
    pub fn new(params: &InitParams, handlers: WindowHandlers) -> Result<Self, HostError> {
        params.validate()?;

        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
        let sink = ProxySink {
            proxy: Mutex::new(event_loop.create_proxy()),
        };
        let dispatcher = Dispatcher::new(Arc::new(sink), thread::current().id());
        let host = WindowHost::build(&event_loop, params, handlers)?;

        Ok(Self {
            event_loop,
            host,
            dispatcher,
        })
    }

    /// A handle other threads use to run code against the window.
    pub fn dispatcher(&self) -> Dispatcher<WindowHost> {
        self.dispatcher.clone()
    }

    pub fn host(&self) -> &WindowHost {
        &self.host
    }

    /// Enters the event loop. Does not return.
    pub fn run(self) -> ! {
        let Runtime {
            event_loop,
            mut host,
            dispatcher: _,
        } = self;
        info!("entering event loop");

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::WindowEvent {
                    event, window_id, ..
                } if window_id == host.window_id() => match event {
                    WindowEvent::Moved(position) => host.handle_moved(position),
                    WindowEvent::Resized(size) => host.handle_resized(size),
                    WindowEvent::CloseRequested => {
                        if host.handle_close_requested() {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                    WindowEvent::Destroyed => *control_flow = ControlFlow::Exit,
                    _ => {}
                },

                Event::UserEvent(UserEvent::Invoke(task)) => {
                    debug!("running invoked task");
                    // A panic must not unwind into the toolkit's C frames.
                    // The dropped task releases its caller with `Abandoned`.
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| task(&mut host)));
                    if outcome.is_err() {
                        error!("invoked task panicked");
                    }
                }

                _ => {}
            }

            if host.take_close_request() && host.handle_close_requested() {
                *control_flow = ControlFlow::Exit;
            }
        })
    }
}
