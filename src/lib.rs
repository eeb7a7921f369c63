#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod generation;
pub mod id_generator;
pub mod input;
pub mod inspector;
pub mod interaction;
pub mod library;
pub mod panels;
pub mod renderer;
pub mod scene;

pub use app::DesignApp;
pub use config::EditorConfig;
pub use element::{DesignElement, ElementKind, ElementPatch};
pub use error::TransitionError;
pub use id_generator::ElementId;
pub use input::{CanvasTransform, InputEvent, InputLocation};
pub use interaction::{InteractionController, InteractionState};
pub use library::CreationLibrary;
pub use renderer::Renderer;
pub use scene::Scene;
