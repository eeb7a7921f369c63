//! Insertable content: shape presets, stock images, text presets and
//! generated text. Every insertion appends a new element to the scene and
//! selects it.

mod photos;
mod placement;
pub mod shapes;
pub mod text;

pub use photos::{
    AssetCatalog, CatalogError, FULL_RESOLUTION_IMAGE_SIZE, ImageVariant, STANDARD_IMAGE_SIZE,
    StockImage,
};
pub use placement::Placement;
pub use shapes::ShapePreset;
pub use text::TextPreset;

use egui::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::element::{DesignElement, TextElement, factory};
use crate::id_generator::ElementId;
use crate::scene::Scene;

/// Sidebar tabs of the creation library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryTab {
    Elements,
    Photos,
    Text,
    Tools,
}

impl LibraryTab {
    pub const ALL: [LibraryTab; 4] = [
        LibraryTab::Elements,
        LibraryTab::Photos,
        LibraryTab::Text,
        LibraryTab::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LibraryTab::Elements => "Elements",
            LibraryTab::Photos => "Photos",
            LibraryTab::Text => "Text",
            LibraryTab::Tools => "Tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LibraryTab::Elements => "⬛",
            LibraryTab::Photos => "🖼",
            LibraryTab::Text => "T",
            LibraryTab::Tools => "✨",
        }
    }
}

/// Builds new elements from presets and external payloads.
#[derive(Debug, Clone)]
pub struct CreationLibrary {
    catalog: AssetCatalog,
    placement: Placement,
    rng: StdRng,
}

impl CreationLibrary {
    pub fn new(catalog: AssetCatalog, placement: Placement) -> Self {
        Self::with_rng(catalog, placement, StdRng::from_entropy())
    }

    /// Uses a caller-provided generator, which makes placement reproducible.
    pub fn with_rng(catalog: AssetCatalog, placement: Placement, rng: StdRng) -> Self {
        Self {
            catalog,
            placement,
            rng,
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn text_presets(&self) -> Vec<TextPreset> {
        text::builtin()
    }

    pub fn add_shape(&mut self, scene: &mut Scene, preset: &ShapePreset) -> ElementId {
        let position = self.placement.place(&mut self.rng);
        let element = factory::create_styled_shape(
            preset.label.clone(),
            preset.size(),
            preset.background_color(),
            preset.corner_radius,
            position,
        );
        insert(scene, element)
    }

    /// Inserts the catalog shape named `label`, if the catalog has one.
    pub fn add_shape_by_label(&mut self, scene: &mut Scene, label: &str) -> Option<ElementId> {
        let preset = self.catalog.shape(label)?.clone();
        Some(self.add_shape(scene, &preset))
    }

    pub fn add_image(
        &mut self,
        scene: &mut Scene,
        asset: &StockImage,
        variant: ImageVariant,
    ) -> ElementId {
        let position = self.placement.place(&mut self.rng);
        let edge = variant.edge();
        let element = factory::create_image(asset.full.clone(), Vec2::splat(edge), position);
        insert(scene, element)
    }

    pub fn add_text(&mut self, scene: &mut Scene, preset: &TextPreset) -> ElementId {
        let position = self.placement.place(&mut self.rng);
        let element = factory::create_styled_text(preset.element(), position);
        insert(scene, element)
    }

    /// Inserts text returned by the generation contract with default styling.
    pub fn add_generated_text(&mut self, scene: &mut Scene, generated: &str) -> ElementId {
        let position = self.placement.place(&mut self.rng);
        let element = factory::create_styled_text(TextElement::new(generated), position);
        insert(scene, element)
    }
}

fn insert(scene: &mut Scene, element: DesignElement) -> ElementId {
    let id = element.id();
    scene.add(element);
    id
}

impl Default for CreationLibrary {
    fn default() -> Self {
        Self::new(AssetCatalog::default(), Placement::default())
    }
}
