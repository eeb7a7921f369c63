use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Painter, Pos2, Rect, Response};
use futures::executor::LocalPool;

use crate::config::{CONFIG_KEY, EditorConfig};
use crate::element::factory;
use crate::generation::{DisconnectedGenerator, GenerationSession, TextGenerator, tools};
use crate::id_generator::ElementId;
use crate::input::{CanvasTransform, InputHandler};
use crate::inspector::{self, InspectorEdit, InspectorError};
use crate::interaction::InteractionController;
use crate::library::{
    AssetCatalog, CreationLibrary, ImageVariant, LibraryTab, Placement, ShapePreset, TextPreset,
};
use crate::panels::{central_panel, inspector_panel, library_panel, tab_bar};
use crate::renderer::Renderer;
use crate::scene::Scene;

const INITIAL_TEXT: &str = "Double click to edit";
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// The design editor. Owns the scene and every component that reads or
/// mutates it; panels borrow it once per frame.
pub struct DesignApp {
    scene: Scene,
    library: CreationLibrary,
    controller: InteractionController,
    renderer: Renderer,
    input_handler: InputHandler,
    config: EditorConfig,
    active_tab: Option<LibraryTab>,
    image_variant: ImageVariant,
    session: Option<GenerationSession>,
    generator: Arc<dyn TextGenerator>,
    pool: LocalPool,
    font_size_draft: Option<(ElementId, String)>,
    inspector_error: Option<String>,
    focused_edit: Option<ElementId>,
}

impl DesignApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_generator(cc, Arc::new(DisconnectedGenerator))
    }

    pub fn with_generator(
        cc: &eframe::CreationContext<'_>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, CONFIG_KEY))
            .map(EditorConfig::sanitized)
            .unwrap_or_default();
        Self::with_config(config, AssetCatalog::default(), generator)
    }

    /// Builds the editor without an eframe context.
    pub fn with_config(
        config: EditorConfig,
        catalog: AssetCatalog,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let placement = Placement::new(config.anchor(), config.placement_jitter);
        let mut scene = Scene::new();
        scene.add(factory::create_text(INITIAL_TEXT, Pos2::new(100.0, 100.0)));
        scene.select(None);

        Self {
            scene,
            library: CreationLibrary::new(catalog, placement),
            controller: InteractionController::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::default(),
            config,
            active_tab: None,
            image_variant: ImageVariant::default(),
            session: None,
            generator,
            pool: LocalPool::new(),
            font_size_draft: None,
            inspector_error: None,
            focused_edit: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn library(&self) -> &CreationLibrary {
        &self.library
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn active_tab(&self) -> Option<LibraryTab> {
        self.active_tab
    }

    /// Opens `tab`, or closes the sidebar if `tab` is already open. Leaving
    /// the Tools tab closes the open tool.
    pub fn toggle_tab(&mut self, tab: LibraryTab) {
        let next = if self.active_tab == Some(tab) {
            None
        } else {
            Some(tab)
        };
        if self.active_tab == Some(LibraryTab::Tools) && next != Some(LibraryTab::Tools) {
            self.close_tool();
        }
        log::debug!("Sidebar tab {:?} -> {:?}", self.active_tab, next);
        self.active_tab = next;
    }

    pub fn image_variant(&self) -> ImageVariant {
        self.image_variant
    }

    pub fn set_image_variant(&mut self, variant: ImageVariant) {
        self.image_variant = variant;
    }

    pub fn add_shape(&mut self, preset: &ShapePreset) -> ElementId {
        self.library.add_shape(&mut self.scene, preset)
    }

    /// Inserts the catalog image `id` at the current variant's size.
    pub fn add_image(&mut self, id: &str) -> Option<ElementId> {
        let asset = self.library.catalog().image(id)?.clone();
        Some(
            self.library
                .add_image(&mut self.scene, &asset, self.image_variant),
        )
    }

    pub fn add_text(&mut self, preset: &TextPreset) -> ElementId {
        self.library.add_text(&mut self.scene, preset)
    }

    pub fn session(&self) -> Option<&GenerationSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GenerationSession> {
        self.session.as_mut()
    }

    /// Opens the tool with `id` in the Tools tab, replacing any open tool.
    pub fn open_tool(&mut self, id: &str) -> bool {
        let Some(tool) = tools::find(id) else {
            log::warn!("Unknown tool {}", id);
            return false;
        };
        self.close_tool();
        log::info!("Opened tool {}", tool.id);
        self.session = Some(GenerationSession::new(tool));
        true
    }

    /// Closes the open tool. A response still in flight is discarded.
    pub fn close_tool(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.discard_pending();
            log::info!("Closed tool {}", session.tool().id);
        }
    }

    /// Starts a request for the open tool, superseding any pending one.
    pub fn generate(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.start(self.generator.as_ref(), &self.pool.spawner());
        }
    }

    /// Inserts the open tool's result as a text element.
    pub fn add_generated_to_canvas(&mut self) -> Option<ElementId> {
        let text = self.session.as_ref()?.result()?.to_owned();
        Some(self.library.add_generated_text(&mut self.scene, &text))
    }

    /// Advances pending generation work without blocking and picks up
    /// finished responses. Returns true while a request is still loading.
    pub fn pump_generation(&mut self) -> bool {
        self.pool.run_until_stalled();
        match self.session.as_mut() {
            Some(session) => {
                session.poll();
                session.is_loading()
            }
            None => false,
        }
    }

    /// Applies an inspector control change to the selected element.
    pub fn apply_inspector_edit(&mut self, edit: InspectorEdit) -> Result<(), InspectorError> {
        self.controller.sync(&mut self.scene);
        let result = if edit == InspectorEdit::Delete && !self.controller.can_delete() {
            Err(InspectorError::DeleteUnavailable(
                self.controller.current_state_name(),
            ))
        } else {
            inspector::apply_edit(&mut self.scene, edit)
        };
        self.inspector_error = result.as_ref().err().map(ToString::to_string);
        self.controller.sync(&mut self.scene);
        result
    }

    pub fn inspector_error(&self) -> Option<&str> {
        self.inspector_error.as_deref()
    }

    /// The font size text shown for `id`: the in-progress draft if one
    /// exists, otherwise `current`.
    pub fn font_size_text(&self, id: ElementId, current: u32) -> String {
        match &self.font_size_draft {
            Some((draft_id, draft)) if *draft_id == id => draft.clone(),
            _ => current.to_string(),
        }
    }

    pub fn set_font_size_draft(&mut self, id: ElementId, draft: String) {
        if self.apply_inspector_edit(InspectorEdit::FontSize(draft.clone())).is_err() {
            log::debug!("Keeping previous font size for {} while draft is invalid", id);
        }
        self.font_size_draft = Some((id, draft));
    }

    /// Drops the font size draft; the field shows the stored value again.
    pub fn clear_font_size_draft(&mut self) {
        self.font_size_draft = None;
        self.inspector_error = None;
    }

    /// Feeds this frame's canvas input to the interaction controller.
    pub fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        response: &Response,
        canvas: Rect,
        transform: &CanvasTransform,
    ) {
        self.controller.sync(&mut self.scene);
        self.input_handler.set_canvas_rect(canvas);
        let events = self.input_handler.process_input(ctx, response);
        let renderer = &self.renderer;
        for event in &events {
            self.controller
                .handle_event(&mut self.scene, event, transform, |id| renderer.measured(id));
        }
        if !self.controller.is_editing() {
            self.focused_edit = None;
        }
    }

    pub fn render_canvas(&mut self, painter: &Painter, canvas: Rect, transform: &CanvasTransform) {
        let editing = self.controller.editing().map(|(id, _)| id);
        self.renderer
            .render(painter, canvas, transform, &self.scene, editing);
    }

    /// The edit surface for the element being edited, and whether it still
    /// needs keyboard focus.
    pub fn edit_surface(&mut self) -> Option<(ElementId, &mut String, bool)> {
        let (id, _) = self.controller.editing()?;
        let needs_focus = self.focused_edit != Some(id);
        self.focused_edit = Some(id);
        let buffer = self.controller.edit_buffer_mut()?;
        Some((id, buffer, needs_focus))
    }

    /// The edit surface lost focus: commit the edit.
    pub fn commit_text_edit(&mut self) {
        self.controller.focus_lost(&mut self.scene);
        self.focused_edit = None;
    }
}

impl eframe::App for DesignApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pump_generation() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        inspector_panel(self, ctx);
        tab_bar(self, ctx);
        library_panel(self, ctx);
        central_panel(self, ctx);
    }
}
