use std::collections::BTreeMap;

use futures::channel::oneshot;
use futures::task::{LocalSpawn, LocalSpawnExt};
use uuid::Uuid;

use super::tools::AiTool;
use super::{GENERATION_FAILED, TextGenerator, generate_text};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Ready(String),
}

#[derive(Debug)]
struct PendingGeneration {
    id: Uuid,
    receiver: oneshot::Receiver<String>,
}

/// State of one open tool in the Tools tab: its inputs, and the request in
/// flight or its result.
///
/// A new request while one is pending supersedes it. Dropping the session
/// (leaving the tool) discards whatever is still in flight.
#[derive(Debug)]
pub struct GenerationSession {
    tool: &'static AiTool,
    inputs: BTreeMap<String, String>,
    status: GenerationStatus,
    pending: Option<PendingGeneration>,
}

impl GenerationSession {
    pub fn new(tool: &'static AiTool) -> Self {
        let inputs = tool
            .inputs
            .iter()
            .map(|input| (input.name.to_owned(), input.default_value().to_owned()))
            .collect();
        Self {
            tool,
            inputs,
            status: GenerationStatus::Idle,
            pending: None,
        }
    }

    pub fn tool(&self) -> &'static AiTool {
        self.tool
    }

    pub fn inputs(&self) -> &BTreeMap<String, String> {
        &self.inputs
    }

    pub fn input(&self, name: &str) -> &str {
        self.inputs.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn input_mut(&mut self, name: &str) -> &mut String {
        self.inputs.entry(name.to_owned()).or_default()
    }

    pub fn set_input(&mut self, name: &str, value: impl Into<String>) {
        self.inputs.insert(name.to_owned(), value.into());
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == GenerationStatus::Loading
    }

    pub fn result(&self) -> Option<&str> {
        match &self.status {
            GenerationStatus::Ready(text) => Some(text),
            _ => None,
        }
    }

    /// Spawns a generation request on `spawner` and enters `Loading`.
    /// Returns the id of the new request.
    pub fn start(&mut self, generator: &dyn TextGenerator, spawner: &impl LocalSpawn) -> Uuid {
        let id = Uuid::new_v4();
        if let Some(previous) = self.pending.take() {
            log::debug!("Generation {} superseded by {}", previous.id, id);
        }

        let request = generate_text(generator, self.tool.system_prompt, &self.inputs);
        let (sender, receiver) = oneshot::channel();
        let task = async move {
            let text = request.await;
            if sender.send(text).is_err() {
                log::debug!("Discarding stale generation response {}", id);
            }
        };

        match spawner.spawn_local(task) {
            Ok(()) => {
                log::info!("Started generation {} for tool {}", id, self.tool.id);
                self.pending = Some(PendingGeneration { id, receiver });
                self.status = GenerationStatus::Loading;
            }
            Err(err) => {
                log::warn!("Could not spawn generation {}: {}", id, err);
                self.status = GenerationStatus::Ready(GENERATION_FAILED.to_owned());
            }
        }
        id
    }

    /// Picks up a finished response. Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        match pending.receiver.try_recv() {
            Ok(None) => false,
            Ok(Some(text)) => {
                log::info!("Generation {} finished", pending.id);
                self.pending = None;
                self.status = GenerationStatus::Ready(text);
                true
            }
            Err(oneshot::Canceled) => {
                log::warn!("Generation {} was dropped before completing", pending.id);
                self.pending = None;
                self.status = GenerationStatus::Ready(GENERATION_FAILED.to_owned());
                true
            }
        }
    }

    /// Drops any request in flight; its response will be discarded.
    pub fn discard_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Discarding pending generation {}", pending.id);
            self.status = GenerationStatus::Idle;
        }
    }
}
