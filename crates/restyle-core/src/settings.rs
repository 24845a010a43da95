use serde::{Deserialize, Serialize};

use crate::Style;

/// Sampling parameters sent to the model alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

impl GenerationSettings {
    /// Proofreading runs nearly deterministic; every other style gets room to rephrase.
    pub fn for_style(style: Style) -> Self {
        let (temperature, top_p) = match style {
            Style::Proofread => (0.1, 0.5),
            _ => (0.7, 0.8),
        };
        Self {
            temperature,
            top_p,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}
