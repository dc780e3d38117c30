//! Replicate prediction/training API wire format types
//!
//! Replicate uses one response envelope for the create/get prediction and
//! create/get training endpoints:
//! <https://replicate.com/docs/reference/http#get-a-training>.
//!
//! In some response states the `error` and `logs` fields carry values that
//! do not fit any stable schema (an error object instead of a string, logs
//! with pathological content), so decoding routes through the tolerant
//! pre-pass and both fields come back absent.

use aiwire_codec::{WireDecode, WireEncode};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Response envelope for predictions and trainings, generic over the
/// model-specific `output` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "O: serde::Deserialize<'de>"))]
pub struct PredictionResponse<O> {
    /// ISO-8601 timestamp of when the job completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// ISO-8601 timestamp of when the job was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Error detail for a failed job. Stripped before decoding; always
    /// absent in decoded values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Job identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-text job logs. Stripped before decoding; always absent in
    /// decoded values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    /// Timing metrics for the job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JobMetrics>,
    /// The model the job ran against, as `owner/name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Model-specific output payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<O>,
    /// ISO-8601 timestamp of when the job started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Current job status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// URLs to cancel the job or fetch its current state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<ActionUrls>,
    /// Version of the model that ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl<O> WireDecode for PredictionResponse<O>
where
    O: DeserializeOwned,
{
    const STRIPPED_FIELDS: &'static [&'static str] = &["logs", "error"];
}

/// Response body for the create/get training endpoints
pub type TrainingResponse = PredictionResponse<TrainingOutput>;

/// Closed set of job states reported by Replicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

/// Timing metrics reported on a finished job
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobMetrics {
    /// Seconds of compute the job consumed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predict_time: Option<f64>,
}

/// Output of a finished training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutput {
    /// Version identifier of the trained model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Location of the trained weights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<String>,
}

/// Action URLs attached to a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionUrls {
    /// Cancel the running job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel: Option<Url>,
    /// Fetch the job's current state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Url>,
}

/// Request body for the create-training endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRequest {
    /// Model to push the trained weights to, as `owner/name`
    pub destination: String,
    /// Model-specific training inputs
    pub input: serde_json::Value,
    /// Webhook URL called when the training status changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<Url>,
}

impl WireEncode for TrainingRequest {}
