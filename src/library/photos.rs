use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shapes::{self, ShapePreset};
use crate::color;

/// Edge length of an inserted stock image.
pub const STANDARD_IMAGE_SIZE: f32 = 200.0;
/// Edge length when the full-resolution variant is requested.
pub const FULL_RESOLUTION_IMAGE_SIZE: f32 = 400.0;

/// One stock image offered by the external asset catalog. References are
/// opaque; they are only ever copied into an image element's source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockImage {
    pub id: String,
    pub thumbnail: String,
    pub full: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageVariant {
    #[default]
    Standard,
    FullResolution,
}

impl ImageVariant {
    pub fn edge(self) -> f32 {
        match self {
            ImageVariant::Standard => STANDARD_IMAGE_SIZE,
            ImageVariant::FullResolution => FULL_RESOLUTION_IMAGE_SIZE,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse asset catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Asset {0} has an empty reference")]
    EmptyReference(String),

    #[error("Shape preset {label} has an invalid color: {color}")]
    InvalidColor { label: String, color: String },
}

/// The finite lists of images and shapes supplied from outside the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCatalog {
    #[serde(default)]
    pub images: Vec<StockImage>,
    #[serde(default = "shapes::builtin")]
    pub shapes: Vec<ShapePreset>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let images = (1..=6)
            .map(|i| StockImage {
                id: format!("stock-{i}"),
                thumbnail: format!("https://picsum.photos/200/200?random={i}"),
                full: format!("https://picsum.photos/400/400?random={i}"),
            })
            .collect();
        Self {
            images,
            shapes: shapes::builtin(),
        }
    }
}

impl AssetCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for image in &self.images {
            if image.thumbnail.trim().is_empty() || image.full.trim().is_empty() {
                return Err(CatalogError::EmptyReference(image.id.clone()));
            }
        }
        for shape in &self.shapes {
            if color::parse_hex(&shape.background).is_none() {
                return Err(CatalogError::InvalidColor {
                    label: shape.label.clone(),
                    color: shape.background.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn image(&self, id: &str) -> Option<&StockImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn shape(&self, label: &str) -> Option<&ShapePreset> {
        self.shapes
            .iter()
            .find(|shape| shape.label.eq_ignore_ascii_case(label))
    }
}
