//! Computer payload in its JSON and XML encodings.
//!
//! JSON wraps the color list in a `{"colors": {"color": [...]}}` object;
//! XML flattens it into repeated `<color>` children of `<computer>`. The
//! wrapper object is a JSON artifact, not a domain concept, so the two
//! shapes convert losslessly through [`ComputerDto`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ksa_core::error::DomainError;
use ksa_core::messages;
use ksa_db::models::computer::{Computer, CreateComputer, UpdateComputer};

/// JSON shape of a computer, also the canonical in-memory payload.
///
/// All fields are optional so the same type serves POST (full, validated)
/// and PUT (partial merge) bodies. `language` keeps explicit nulls on
/// output; `colors` is always present on records read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsDto>,
}

/// The JSON wrapper object around the color list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorsDto {
    pub color: Vec<String>,
}

/// XML shape of a computer: root `<computer>`, colors as repeated
/// `<color>` children without a wrapping element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "computer")]
pub struct ComputerXml {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, rename = "color", skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
}

/// XML shape of a computer collection: `<computers>` with repeated
/// `<computer>` children.
#[derive(Debug, Serialize)]
#[serde(rename = "computers")]
pub struct ComputerListXml {
    pub computer: Vec<ComputerXml>,
}

impl From<Computer> for ComputerDto {
    fn from(computer: Computer) -> Self {
        Self {
            kind: Some(computer.kind),
            maker: Some(computer.maker),
            model: Some(computer.model),
            language: computer.language,
            colors: Some(ColorsDto {
                color: computer.colors,
            }),
        }
    }
}

impl From<ComputerDto> for ComputerXml {
    fn from(dto: ComputerDto) -> Self {
        Self {
            kind: dto.kind,
            maker: dto.maker,
            model: dto.model,
            language: dto.language,
            color: dto.colors.map(|c| c.color).unwrap_or_default(),
        }
    }
}

impl From<ComputerXml> for ComputerDto {
    fn from(xml: ComputerXml) -> Self {
        // XML has no wrapper element, so "no <color> children" is the only
        // way to leave colors out. An empty list therefore means absent;
        // a patch built from it must not replace the stored list.
        let colors = if xml.color.is_empty() {
            None
        } else {
            Some(ColorsDto { color: xml.color })
        };
        Self {
            kind: xml.kind,
            maker: xml.maker,
            model: xml.model,
            language: xml.language,
            colors,
        }
    }
}

impl ComputerDto {
    /// Per-field checks for POST bodies: `type`, `maker` and `model` must be
    /// present and non-blank.
    pub fn validate_create(&self) -> Result<(), DomainError> {
        let mut errors = BTreeMap::new();

        if is_blank(&self.kind) {
            errors.insert("type".to_string(), messages::VALIDATION_TYPE_REQUIRED.to_string());
        }
        if is_blank(&self.maker) {
            errors.insert("maker".to_string(), messages::VALIDATION_MAKER_REQUIRED.to_string());
        }
        if is_blank(&self.model) {
            errors.insert("model".to_string(), messages::VALIDATION_MODEL_REQUIRED.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Convert a validated POST body into the insert DTO.
    pub fn into_create(self) -> CreateComputer {
        CreateComputer {
            kind: self.kind.unwrap_or_default(),
            maker: self.maker.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            language: self.language,
            colors: self.colors.map(|c| c.color).unwrap_or_default(),
        }
    }

    /// Convert a PUT body into the partial-update DTO. Absent fields stay
    /// untouched; a present color wrapper replaces the stored list in full.
    pub fn into_patch(self) -> UpdateComputer {
        UpdateComputer {
            kind: self.kind,
            maker: self.maker,
            model: self.model,
            language: self.language,
            colors: self.colors.map(|c| c.color),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}
