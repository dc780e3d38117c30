//! fal.ai LoRA training API wire format types

use aiwire_codec::{WireDecode, WireEncode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Input schema of the `flux-lora-fast-training` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxLoraFastTrainingInput {
    /// URL of a zip archive with the training images
    pub images_data_url: String,
    /// Trigger word to bind the trained concept to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_word: Option<String>,
    /// Number of training steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Whether to generate segmentation masks for the images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_masks: Option<bool>,
    /// Whether the training captures a style rather than a subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_style: Option<bool>,
}

impl WireEncode for FluxLoraFastTrainingInput {}

/// Output schema of the `flux-lora-fast-training` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxLoraFastTrainingOutput {
    /// Remote training configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<TrainingFile>,
    /// Remote file holding the trained diffusers lora weights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffusers_lora_file: Option<TrainingFile>,
}

impl WireDecode for FluxLoraFastTrainingOutput {}

/// File descriptor within a training output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingFile {
    /// Mime type of the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Name of the file, auto-generated when not provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size of the file in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// URL the file can be downloaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}
