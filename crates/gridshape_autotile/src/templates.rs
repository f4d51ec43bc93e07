//! Canonical neighbor templates
//!
//! A [`TemplateSet`] maps each shape category to its reference neighbor
//! offsets before any rotation. Sets are validated on construction and are
//! immutable afterwards; share them by reference or clone.

use crate::rotation::Rotation;
use crate::shape::ShapeCategory;
use gridshape_core::{Direction, GridPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Errors that can occur when building, loading or saving template sets
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// On-disk shape of a template set, before validation
#[derive(Debug, Deserialize)]
struct TemplateSetFile {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    templates: BTreeMap<ShapeCategory, Vec<GridPoint>>,
}

impl TryFrom<TemplateSetFile> for TemplateSet {
    type Error = TemplateError;

    fn try_from(file: TemplateSetFile) -> Result<Self, Self::Error> {
        validate_templates(&file.templates)?;
        Ok(Self {
            id: file.id,
            name: file.name,
            templates: file.templates,
        })
    }
}

/// Immutable table of canonical templates, keyed in matcher search order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateSetFile")]
pub struct TemplateSet {
    id: Uuid,
    name: String,
    templates: BTreeMap<ShapeCategory, Vec<GridPoint>>,
}

impl TemplateSet {
    /// Build and validate a template set
    pub fn new<I>(name: impl Into<String>, templates: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (ShapeCategory, Vec<GridPoint>)>,
    {
        let mut table = BTreeMap::new();
        for (category, offsets) in templates {
            if table.insert(category, offsets).is_some() {
                return Err(TemplateError::ValidationError(format!(
                    "category {} listed twice",
                    category.name()
                )));
            }
        }

        TemplateSet::try_from(TemplateSetFile {
            id: Uuid::new_v4(),
            name: name.into(),
            templates: table,
        })
    }

    /// The reference table: every template starts east and turns
    /// counter-clockwise. Its id is always [`Uuid::nil`].
    pub fn standard() -> Self {
        use Direction::*;

        let offsets = |dirs: &[Direction]| dirs.iter().map(|d| d.offset()).collect::<Vec<_>>();
        let templates = BTreeMap::from([
            (ShapeCategory::Inner, offsets(&[East, North, West, South])),
            (ShapeCategory::ThreeSide, offsets(&[East, North, West])),
            (ShapeCategory::Side, offsets(&[East, West])),
            (ShapeCategory::BigAngle, offsets(&[East, North])),
            (ShapeCategory::Angle, offsets(&[East])),
        ]);

        Self {
            id: Uuid::nil(),
            name: "standard".to_string(),
            templates,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template offsets for a category
    pub fn get(&self, category: ShapeCategory) -> Option<&[GridPoint]> {
        self.templates.get(&category).map(Vec::as_slice)
    }

    /// Templates in ascending category order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeCategory, &[GridPoint])> {
        self.templates
            .iter()
            .map(|(&category, offsets)| (category, offsets.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// A category's template turned about the origin, sorted by grid order
    pub fn rotated(
        &self,
        category: ShapeCategory,
        rotation: Rotation,
    ) -> Option<Vec<GridPoint>> {
        self.get(category)
            .map(|offsets| rotate_sorted(offsets, rotation))
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn rotate_sorted(offsets: &[GridPoint], rotation: Rotation) -> Vec<GridPoint> {
    let mut rotated: Vec<GridPoint> = offsets
        .iter()
        .map(|&offset| rotation.apply(offset, GridPoint::ORIGIN))
        .collect();
    rotated.sort();
    rotated
}

/// Check a raw template table before it becomes a [`TemplateSet`]
fn validate_templates(
    templates: &BTreeMap<ShapeCategory, Vec<GridPoint>>,
) -> Result<(), TemplateError> {
    if templates.is_empty() {
        return Err(TemplateError::ValidationError(
            "template set has no templates".to_string(),
        ));
    }

    for (category, offsets) in templates {
        if *category == ShapeCategory::Outside {
            return Err(TemplateError::ValidationError(
                "Outside cannot carry a template".to_string(),
            ));
        }
        if offsets.is_empty() {
            return Err(TemplateError::ValidationError(format!(
                "template for {} is empty",
                category.name()
            )));
        }
        if let Some(bad) = offsets.iter().find(|o| !o.is_unit()) {
            return Err(TemplateError::ValidationError(format!(
                "template for {} has non-unit offset {}",
                category.name(),
                bad
            )));
        }
        let mut sorted = offsets.clone();
        sorted.sort();
        sorted.dedup();
        if sorted.len() != offsets.len() {
            return Err(TemplateError::ValidationError(format!(
                "template for {} repeats an offset",
                category.name()
            )));
        }
    }

    // No rotation of one template may coincide with another template
    let entries: Vec<_> = templates.iter().collect();
    for (i, (first, first_offsets)) in entries.iter().enumerate() {
        for (second, second_offsets) in &entries[i + 1..] {
            let target = rotate_sorted(second_offsets, Rotation::FULL);
            let clash = Rotation::SEARCH_ORDER
                .into_iter()
                .any(|r| rotate_sorted(first_offsets, r) == target);
            if clash {
                return Err(TemplateError::ValidationError(format!(
                    "templates for {} and {} are rotations of each other",
                    first.name(),
                    second.name()
                )));
            }
        }
    }

    Ok(())
}

/// Load a template set from a JSON file
pub fn load_templates(path: &Path) -> Result<TemplateSet, TemplateError> {
    let bytes = std::fs::read(path).map_err(|e| TemplateError::IoError(e.to_string()))?;

    let set = load_templates_from_bytes(&bytes)?;
    debug!(path = %path.display(), name = set.name(), "loaded template set");
    Ok(set)
}

/// Parse a template set from a JSON string
pub fn parse_templates(json: &str) -> Result<TemplateSet, TemplateError> {
    load_templates_from_bytes(json.as_bytes())
}

/// Load a template set from JSON bytes
pub fn load_templates_from_bytes(bytes: &[u8]) -> Result<TemplateSet, TemplateError> {
    let file: TemplateSetFile =
        serde_json::from_slice(bytes).map_err(|e| TemplateError::ParseError(e.to_string()))?;

    TemplateSet::try_from(file)
}

/// Save a template set to a JSON file
pub fn save_templates(set: &TemplateSet, path: &Path) -> Result<(), TemplateError> {
    let content =
        serde_json::to_string_pretty(set).map_err(|e| TemplateError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| TemplateError::IoError(e.to_string()))?;

    Ok(())
}
