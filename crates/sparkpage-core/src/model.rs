//! Typed page data decoded from the model's JSON reply.
//!
//! Field names on the wire are camelCase, matching the schema the prompt
//! asks the model to produce.

use serde::{Deserialize, Serialize};

use crate::{Result, SparkError};

/// A titled page section with a free-text illustration keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub illustration: String,
}

/// The closing call-to-action block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button_text: String,
}

/// A complete generated landing page.
///
/// Immutable once constructed; held for the lifetime of the display view
/// and discarded on reset. All fields are required: a reply missing any of
/// them fails to decode with [`SparkError::SchemaMismatch`] instead of
/// rendering blank sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAppData {
    pub app_name: String,
    pub tagline: String,
    pub hero_illustration: String,
    /// Feature cards, in display order.
    pub features: Vec<Section>,
    pub problem_statement: Section,
    pub solution_statement: Section,
    pub target_audience: Section,
    pub cta: CallToAction,
}

impl GeneratedAppData {
    /// Decode a JSON span into page data.
    ///
    /// Syntactically invalid JSON reports as [`SparkError::MalformedJson`];
    /// well-formed JSON of the wrong shape reports as
    /// [`SparkError::SchemaMismatch`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(SparkError::MalformedJson)?;
        serde_json::from_value(value).map_err(SparkError::SchemaMismatch)
    }
}
