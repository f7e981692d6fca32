use std::fmt;

// === InitError ===

/// Errors detected while validating an initialization record.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// The record was produced for a different layout version.
    LayoutMismatch { expected: u32, actual: u32 },
    /// Neither a start URL nor a start HTML string was given.
    MissingStartContent,
    /// A bounded text value exceeded its byte limit.
    TextTooLong { limit: usize, actual: usize },
    /// A custom scheme name is not a syntactically valid URI scheme.
    InvalidSchemeName(String),
    /// A custom scheme name collides with a scheme the engine handles itself.
    ReservedScheme(String),
    /// More custom schemes than the host can register.
    TooManySchemes(usize),
    /// The same custom scheme was listed twice.
    DuplicateScheme(String),
    /// Zoom percentage must be positive.
    InvalidZoom(i32),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::LayoutMismatch { expected, actual } => write!(
                f,
                "Initial parameters use layout version {}, but expected version {}",
                actual, expected
            ),
            InitError::MissingStartContent => {
                write!(f, "Neither a start URL nor a start HTML string was specified")
            }
            InitError::TextTooLong { limit, actual } => {
                write!(f, "Text is {} bytes, limit is {} bytes", actual, limit)
            }
            InitError::InvalidSchemeName(name) => write!(f, "Invalid scheme name: {:?}", name),
            InitError::ReservedScheme(name) => write!(f, "Reserved scheme name: {}", name),
            InitError::TooManySchemes(count) => {
                write!(f, "Too many custom schemes: {} (at most 16)", count)
            }
            InitError::DuplicateScheme(name) => write!(f, "Duplicate scheme name: {}", name),
            InitError::InvalidZoom(zoom) => write!(f, "Invalid zoom percentage: {}", zoom),
        }
    }
}

impl std::error::Error for InitError {}

// === DispatchError ===

/// Errors returned by the cross-thread invocation bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The event loop no longer accepts tasks.
    EventLoopClosed,
    /// `invoke` was called on the event-loop thread, which would deadlock.
    CalledFromEventLoop,
    /// The task was dropped before it ran.
    Abandoned,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::EventLoopClosed => write!(f, "Event loop is closed"),
            DispatchError::CalledFromEventLoop => {
                write!(f, "Invoke called from the event-loop thread")
            }
            DispatchError::Abandoned => write!(f, "Task was dropped before it ran"),
        }
    }
}

impl std::error::Error for DispatchError {}

// === HostError ===

/// Errors raised while building or driving the window host.
#[derive(Debug)]
pub enum HostError {
    /// The initialization record was rejected.
    Init(InitError),
    /// The native window could not be created.
    Window(String),
    /// The web view could not be created or refused an operation.
    WebView(String),
    /// Script evaluation could not be scheduled.
    Script(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Init(err) => write!(f, "Invalid initial parameters: {}", err),
            HostError::Window(msg) => write!(f, "Window error: {}", msg),
            HostError::WebView(msg) => write!(f, "Web view error: {}", msg),
            HostError::Script(msg) => write!(f, "Script evaluation error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Init(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InitError> for HostError {
    fn from(err: InitError) -> Self {
        HostError::Init(err)
    }
}

// === ConfigError ===

/// Errors related to loading and persisting the window configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A file I/O error occurred.
    IoError(String),
    /// JSON (de)serialization failed.
    SerializationError(String),
    /// The requested key does not exist.
    InvalidKey(String),
    /// The provided value is invalid for the key.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidKey(key) => write!(f, "Invalid config key: {}", key),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
