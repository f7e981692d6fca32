use std::thread;
use std::time::Duration;

use rstest::rstest;
use webframe::bridge::completion::ScriptCompletion;
use webframe::bridge::script::{dispatch_call, quote_message, BOOTSTRAP_SCRIPT, DISPATCH_FUNCTION};

/// Pulls the string literal back out of `__dispatchMessageCallback(...)`.
fn argument_of(call: &str) -> String {
    let inner = call
        .strip_prefix(&format!("{}(", DISPATCH_FUNCTION))
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("dispatch call shape");
    serde_json::from_str(inner).expect("argument is a valid string literal")
}

#[rstest]
#[case("hello")]
#[case("he said \"hi\"")]
#[case("back\\slash")]
#[case("line one\nline two\r\n")]
#[case("</script><script>alert(1)</script>")]
#[case("unicode: 日本語 \u{2028} \u{1F600}")]
#[case("")]
fn dispatched_message_arrives_unchanged(#[case] message: &str) {
    assert_eq!(argument_of(&dispatch_call(message)), message);
}

#[test]
fn quotes_are_escaped() {
    assert_eq!(quote_message(r#"he said "hi""#), r#""he said \"hi\"""#);
}

#[test]
fn bootstrap_exposes_external_api() {
    assert!(BOOTSTRAP_SCRIPT.contains("sendMessage"));
    assert!(BOOTSTRAP_SCRIPT.contains("receiveMessage"));
    assert!(BOOTSTRAP_SCRIPT.contains("typeof message !== 'string'"));
}

#[test]
fn bootstrap_posts_through_handler_visible_in_subframes() {
    let handler = BOOTSTRAP_SCRIPT
        .find("window.webkit.messageHandlers")
        .expect("per-frame message handler lookup");
    let fallback = BOOTSTRAP_SCRIPT
        .find("window.ipc.postMessage")
        .expect("main-frame fallback");
    assert!(handler < fallback);
}

#[test]
fn completion_pumps_until_callback_fires() {
    let completion = ScriptCompletion::new();
    let resolver = completion.resolver();
    let mut calls = 0;
    let iterations = completion.wait_with(|| {
        calls += 1;
        if calls == 3 {
            resolver.resolve();
        }
    });
    assert_eq!(iterations, 3);
    assert!(completion.is_complete());
}

#[test]
fn completion_set_from_another_thread() {
    let completion = ScriptCompletion::new();
    let resolver = completion.resolver();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        resolver.resolve();
    });
    completion.wait_with(|| thread::sleep(Duration::from_millis(1)));
    assert!(completion.is_complete());
    handle.join().unwrap();
}

#[test]
fn callback_discarded_by_engine_still_settles() {
    // Stands in for an engine that queues the callback and later throws
    // it away without calling it.
    let completion = ScriptCompletion::new();
    let resolver = completion.resolver();
    let mut queued: Vec<Box<dyn FnOnce(String) + Send>> =
        vec![Box::new(move |_result: String| resolver.resolve())];

    let mut pumps = 0;
    let iterations = completion.wait_with(|| {
        pumps += 1;
        if pumps == 2 {
            queued.clear();
        }
        assert!(pumps < 1_000, "completion never settled");
    });
    assert_eq!(iterations, 2);
    assert!(!completion.was_evaluated());
}
