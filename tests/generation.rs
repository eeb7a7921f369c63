use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use eframe_design::DesignApp;
use eframe_design::config::EditorConfig;
use eframe_design::generation::{
    DisconnectedGenerator, EMPTY_RESPONSE, GENERATION_FAILED, GenerationError, GenerationFuture,
    GenerationSession, GenerationStatus, TextGenerator, generate_text, tools,
};
use eframe_design::library::{AssetCatalog, LibraryTab};
use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};

/// Always answers with the same text.
struct FixedGenerator(String);

impl TextGenerator for FixedGenerator {
    fn generate(&self, _: &str, _: &BTreeMap<String, String>) -> GenerationFuture {
        let text = self.0.clone();
        Box::pin(async move { Ok(text) })
    }
}

struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _: &str, _: &BTreeMap<String, String>) -> GenerationFuture {
        Box::pin(async { Err(GenerationError::Service("quota exceeded".into())) })
    }
}

/// Holds every request open until the test answers it. Clones share state.
#[derive(Default, Clone)]
struct ManualGenerator {
    requests: Arc<Mutex<Vec<Option<oneshot::Sender<String>>>>>,
    prompts: Arc<Mutex<Vec<(String, BTreeMap<String, String>)>>>,
}

impl ManualGenerator {
    fn respond(&self, index: usize, text: &str) {
        let sender = self.requests.lock().unwrap()[index].take().unwrap();
        // The receiving side may already be gone; that is the stale case
        let _ = sender.send(text.to_owned());
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl TextGenerator for ManualGenerator {
    fn generate(&self, template: &str, variables: &BTreeMap<String, String>) -> GenerationFuture {
        let (sender, receiver) = oneshot::channel();
        self.requests.lock().unwrap().push(Some(sender));
        self.prompts
            .lock()
            .unwrap()
            .push((template.to_owned(), variables.clone()));
        Box::pin(async move {
            receiver
                .await
                .map_err(|_| GenerationError::Service("request dropped".into()))
        })
    }
}

fn no_vars() -> BTreeMap<String, String> {
    BTreeMap::new()
}

fn app_with(generator: Arc<dyn TextGenerator>) -> DesignApp {
    DesignApp::with_config(EditorConfig::default(), AssetCatalog::default(), generator)
}

#[test]
fn test_failure_yields_placeholder() {
    let text = block_on(generate_text(&FailingGenerator, "Prompt", &no_vars()));
    assert_eq!(text, GENERATION_FAILED);
    assert_eq!(text, "Failed to generate.");

    let text = block_on(generate_text(&DisconnectedGenerator, "Prompt", &no_vars()));
    assert_eq!(text, GENERATION_FAILED);
}

#[test]
fn test_empty_response_placeholder() {
    let text = block_on(generate_text(&FixedGenerator("  \n".into()), "Prompt", &no_vars()));
    assert_eq!(text, EMPTY_RESPONSE);
}

#[test]
fn test_successful_response_passes_through() {
    let text = block_on(generate_text(&FixedGenerator("Go green".into()), "Prompt", &no_vars()));
    assert_eq!(text, "Go green");
}

#[test]
fn test_session_defaults_and_inputs() {
    let tool = tools::find("fake-comment").unwrap();
    let mut session = GenerationSession::new(tool);

    assert_eq!(session.input("vibe"), "Positive");
    assert_eq!(session.input("topic"), "");
    assert_eq!(session.status(), &GenerationStatus::Idle);

    session.set_input("topic", "Launch day");
    session.input_mut("vibe").replace_range(.., "Troll");
    assert_eq!(session.input("topic"), "Launch day");
    assert_eq!(session.input("vibe"), "Troll");
    assert!(tools::find("no-such-tool").is_none());
}

#[test]
fn test_session_sends_system_prompt_and_inputs() {
    let generator = ManualGenerator::default();
    let mut pool = LocalPool::new();
    let tool = tools::find("trend-scanner").unwrap();
    let mut session = GenerationSession::new(tool);
    session.set_input("topic", "Sustainable Fashion");

    session.start(&generator, &pool.spawner());
    pool.run_until_stalled();

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].0, tool.system_prompt);
    assert_eq!(prompts[0].1["topic"], "Sustainable Fashion");
}

#[test]
fn test_loading_until_response_arrives() {
    let generator = ManualGenerator::default();
    let mut pool = LocalPool::new();
    let mut session = GenerationSession::new(tools::find("swot-gen").unwrap());

    session.start(&generator, &pool.spawner());
    pool.run_until_stalled();
    assert!(session.is_loading());
    assert!(!session.poll());

    generator.respond(0, "Strengths: flour");
    pool.run_until_stalled();

    assert!(session.poll());
    assert_eq!(session.result(), Some("Strengths: flour"));
}

#[test]
fn test_new_request_supersedes_pending() {
    let generator = ManualGenerator::default();
    let mut pool = LocalPool::new();
    let mut session = GenerationSession::new(tools::find("script-gen").unwrap());

    let first = session.start(&generator, &pool.spawner());
    let second = session.start(&generator, &pool.spawner());
    assert_ne!(first, second);
    pool.run_until_stalled();
    assert_eq!(generator.request_count(), 2);

    // The fresh answer arrives first; the stale one must not replace it
    generator.respond(1, "fresh");
    pool.run_until_stalled();
    session.poll();
    generator.respond(0, "stale");
    pool.run_until_stalled();
    session.poll();

    assert_eq!(session.result(), Some("fresh"));
}

#[test]
fn test_discarded_response_is_ignored() {
    let generator = ManualGenerator::default();
    let mut pool = LocalPool::new();
    let mut session = GenerationSession::new(tools::find("brand-voice").unwrap());

    session.start(&generator, &pool.spawner());
    pool.run_until_stalled();
    session.discard_pending();
    generator.respond(0, "too late");
    pool.run_until_stalled();

    assert!(!session.poll());
    assert_eq!(session.status(), &GenerationStatus::Idle);
}

#[test]
fn test_dropped_request_reports_failure() {
    let generator = ManualGenerator::default();
    let mut pool = LocalPool::new();
    let mut session = GenerationSession::new(tools::find("campaign-blueprint").unwrap());

    session.start(&generator, &pool.spawner());
    pool.run_until_stalled();
    // Service side goes away without answering
    generator.requests.lock().unwrap().clear();
    pool.run_until_stalled();

    assert!(session.poll());
    assert_eq!(session.result(), Some(GENERATION_FAILED));
}

#[test]
fn test_app_generates_and_inserts_text() {
    let generator = ManualGenerator::default();
    let mut app = app_with(Arc::new(generator.clone()));
    let initial = app.scene().len();

    app.toggle_tab(LibraryTab::Tools);
    assert!(app.open_tool("magic-redesign"));
    app.generate();
    assert!(app.pump_generation());

    generator.respond(0, "Use a bolder headline");
    assert!(!app.pump_generation());
    let id = app.add_generated_to_canvas().unwrap();

    assert_eq!(app.scene().len(), initial + 1);
    assert_eq!(app.scene().get(id).unwrap().content(), "Use a bolder headline");
    assert_eq!(app.scene().selected_id(), Some(id));
}

#[test]
fn test_app_failure_still_offers_placeholder() {
    let mut app = app_with(Arc::new(FailingGenerator));

    app.toggle_tab(LibraryTab::Tools);
    app.open_tool("trend-scanner");
    app.generate();
    app.pump_generation();

    assert_eq!(app.session().and_then(|s| s.result()), Some(GENERATION_FAILED));
}

#[test]
fn test_leaving_tools_tab_discards_session() {
    let generator = ManualGenerator::default();
    let mut app = app_with(Arc::new(generator.clone()));

    app.toggle_tab(LibraryTab::Tools);
    app.open_tool("swot-gen");
    app.generate();
    app.pump_generation();
    app.toggle_tab(LibraryTab::Photos);

    assert!(app.session().is_none());
    assert_eq!(app.active_tab(), Some(LibraryTab::Photos));

    generator.respond(0, "nobody is listening");
    assert!(!app.pump_generation());
    assert!(app.add_generated_to_canvas().is_none());
}

#[test]
fn test_clicking_open_tab_closes_sidebar() {
    let mut app = app_with(Arc::new(DisconnectedGenerator));

    app.toggle_tab(LibraryTab::Elements);
    assert_eq!(app.active_tab(), Some(LibraryTab::Elements));
    app.toggle_tab(LibraryTab::Elements);
    assert_eq!(app.active_tab(), None);
}
