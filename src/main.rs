//! webframe: opens a window with an embedded web view.
//!
//! Reads the initialization record from the config store, applies
//! command-line edits and overrides and runs the window. Messages posted
//! by the page are echoed back from a worker thread through the invocation
//! bridge. Without the `gui` feature it validates and prints the record.

use std::path::PathBuf;

use clap::Parser;
use webframe::logging::{self, LogConfig, LogFormat};
use webframe::services::config_store::{parse_assignment, ConfigStore, ConfigStoreTrait};
use webframe::types::init_params::InitParams;
use webframe::types::scheme::{SchemeName, SchemeResponse};

const DEMO_PAGE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><title>webframe</title>
<style>body{font-family:sans-serif;margin:2em}#log{font-family:monospace;white-space:pre}</style>
</head><body>
<h1>webframe</h1>
<input id="msg" value="hello"> <button id="send">Send</button>
<button id="info">Fetch app://localhost/info</button>
<div id="log"></div>
<script>
var log = document.getElementById('log');
function line(t) { log.textContent += t + '\n'; }
window.external.receiveMessage(function (m) { line('host: ' + m); });
document.getElementById('send').addEventListener('click', function () {
  window.external.sendMessage(document.getElementById('msg').value);
});
document.getElementById('info').addEventListener('click', function () {
  fetch('app://localhost/info').then(function (r) { return r.text(); }).then(line, function (e) { line('fetch failed: ' + e); });
});
</script>
</body></html>"#;

#[derive(Parser, Debug)]
#[command(name = "webframe", version, about = "Native window hosting a web view")]
struct Args {
    /// Path to the JSON config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<String>,

    /// Start URL, overrides the config file
    #[arg(long)]
    url: Option<String>,

    /// HTML file to load as the start page
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Window title, overrides the config file
    #[arg(long)]
    title: Option<String>,

    /// Edit a config field, e.g. `--set zoom=150 --set topmost=true`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,

    /// Start from default values instead of the stored config
    #[arg(long)]
    reset: bool,

    /// Write the resulting config back to the config file
    #[arg(long)]
    save: bool,

    /// pretty, compact or json
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    /// Log filter directives (e.g. "webframe=debug,wry=warn"); overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn log_config(&self) -> LogConfig {
        let config = LogConfig::default().with_format(self.log_format);
        match &self.log_filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

/// Applies `--reset`, `--set` and the start-page overrides to the stored
/// record; with `--save` the result is persisted before the demo fallback
/// is filled in.
fn load_params(
    args: &Args,
    store: &mut dyn ConfigStoreTrait,
) -> Result<InitParams, Box<dyn std::error::Error>> {
    store.load()?;
    if args.reset {
        store.reset();
    }
    for assignment in &args.assignments {
        let (key, value) = parse_assignment(assignment)?;
        store.set_value(&key, value)?;
    }

    let mut params = store.params().clone();
    if let Some(title) = &args.title {
        params = params.with_title(title)?;
    }
    if let Some(url) = &args.url {
        params = params.with_start_url(url)?;
    }
    if let Some(path) = &args.html_file {
        params = params.with_start_html(std::fs::read_to_string(path)?);
    }

    if args.save {
        store.replace(params.clone());
        store.save()?;
    }

    if params.start_content().is_none() {
        params = params.with_start_html(DEMO_PAGE);
        let app = SchemeName::parse("app")?;
        if !params.custom_scheme_names.contains(&app) {
            params.custom_scheme_names.push(app);
        }
        if params.title.is_empty() {
            params = params.with_title("webframe")?;
        }
    }

    Ok(params)
}

/// Answers `app:` requests: `/info` as JSON, the demo page at the root,
/// 404 for anything else.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
fn serve_app_scheme(uri: &str) -> SchemeResponse {
    let rest = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    let path = rest.find('/').map_or("/", |i| &rest[i..]);
    let path = path.split(['?', '#']).next().unwrap_or("/");

    match path {
        "/info" => {
            let body = serde_json::json!({ "uri": uri, "served_by": "webframe" }).to_string();
            SchemeResponse::new(body.into_bytes(), "application/json")
        }
        "/" | "/index.html" => SchemeResponse::html(DEMO_PAGE),
        _ => SchemeResponse::html("<h1>Not found</h1>").with_status(404),
    }
}

#[cfg(feature = "gui")]
fn main() {
    use std::sync::mpsc::{self, Receiver};
    use std::thread;

    use tracing::{debug, info, warn};
    use webframe::bridge::invoke::Dispatcher;
    use webframe::ui::fatal;
    use webframe::ui::handlers::WindowHandlers;
    use webframe::ui::host::WindowHost;
    use webframe::ui::runtime::Runtime;

    fn echo_worker(messages: Receiver<String>, dispatcher: Dispatcher<WindowHost>) {
        for message in messages {
            let reply = format!("echo: {}", message);
            let result = dispatcher.invoke(move |host| {
                if let Err(e) = host.send_web_message(&reply) {
                    warn!(%e, "echo failed");
                }
            });
            if let Err(e) = result {
                warn!(%e, "stopping echo worker");
                break;
            }
        }
    }

    let args = Args::parse();
    logging::init(args.log_config());

    let mut store = ConfigStore::new(args.config.clone());
    let params = match load_params(&args, &mut store) {
        Ok(p) => p,
        Err(e) => fatal::abort_with_dialog("webframe", &e),
    };

    let (tx, rx) = mpsc::channel::<String>();
    let handlers = WindowHandlers::new()
        .on_message(move |message| {
            info!(text = message, "message from page");
            let _ = tx.send(message.to_string());
        })
        .on_moved(|x, y| debug!(x, y, "moved"))
        .on_resized(|width, height| debug!(width, height, "resized"))
        .on_closing(|| {
            info!("close requested");
            false
        })
        .on_scheme_request(serve_app_scheme);

    let runtime = match Runtime::new(&params, handlers) {
        Ok(r) => r,
        Err(e) => fatal::abort_with_dialog("webframe", &e),
    };
    info!(
        dpi = runtime.host().screen_dpi(),
        zoom = runtime.host().zoom(),
        "window created"
    );

    let dispatcher = runtime.dispatcher();
    if let Err(e) = thread::Builder::new()
        .name("echo".to_string())
        .spawn(move || echo_worker(rx, dispatcher))
    {
        warn!(%e, "could not start echo worker");
    }

    runtime.run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    let args = Args::parse();
    logging::init(args.log_config());

    let mut store = ConfigStore::new(args.config.clone());
    let params = match load_params(&args, &mut store) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("webframe: {}", e);
            std::process::exit(1);
        }
    };

    match params.validate() {
        Ok(()) => match serde_json::to_string_pretty(&params) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("webframe: {}", e),
        },
        Err(e) => {
            eprintln!("webframe: {}", e);
            std::process::exit(1);
        }
    }
    println!("Built without the `gui` feature; no window opened.");
}
