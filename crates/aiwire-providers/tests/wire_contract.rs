//! Cross-provider wire contract tests
//!
//! Exercises the catalog through the public byte-level API the way a
//! transport layer would: encode a request body, hand response bytes to
//! `from_wire`, and rely on the error taxonomy for everything malformed.

use aiwire_codec::{WireDecode, WireEncode, WireError, decode};
use aiwire_providers::fal::{FluxLoraFastTrainingInput, FluxLoraFastTrainingOutput};
use aiwire_providers::mistral::{ChatCompletionRequest, Message, ResponseFormat};
use aiwire_providers::replicate::{JobStatus, TrainingRequest, TrainingResponse};
use serde_json::json;

/// Discriminator wire values within one variant schema must be unique.
fn discriminator_values<T: serde::Serialize>(alternatives: &[T], tag: &str) -> Vec<String> {
    alternatives
        .iter()
        .map(|alt| {
            serde_json::to_value(alt).unwrap()[tag]
                .as_str()
                .unwrap()
                .to_owned()
        })
        .collect()
}

fn assert_unique(values: &[String]) {
    let mut seen = values.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), values.len(), "duplicate discriminator in {values:?}");
}

#[test]
fn message_roles_are_unique() {
    let values = discriminator_values(
        &[
            Message::Assistant {
                content: String::new(),
            },
            Message::System {
                content: String::new(),
            },
            Message::User {
                content: String::new(),
            },
        ],
        "role",
    );
    assert_eq!(values, ["assistant", "system", "user"]);
    assert_unique(&values);
}

#[test]
fn response_format_types_are_unique() {
    let values = discriminator_values(&[ResponseFormat::JsonObject, ResponseFormat::Text], "type");
    assert_eq!(values, ["json_object", "text"]);
    assert_unique(&values);
}

#[test]
fn job_statuses_are_unique() {
    let statuses = [
        JobStatus::Starting,
        JobStatus::Processing,
        JobStatus::Succeeded,
        JobStatus::Failed,
        JobStatus::Canceled,
    ];
    let values: Vec<String> = statuses
        .iter()
        .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        values,
        ["starting", "processing", "succeeded", "failed", "canceled"]
    );
    assert_unique(&values);
}

#[test]
fn chat_request_round_trips_across_optional_presence() {
    let base = ChatCompletionRequest::new(
        vec![Message::User {
            content: "hi".to_owned(),
        }],
        "mistral-small-latest",
    );

    let variants = [
        base.clone(),
        ChatCompletionRequest {
            temperature: Some(0.2),
            ..base.clone()
        },
        ChatCompletionRequest {
            frequency_penalty: Some(0.0),
            presence_penalty: Some(2.0),
            stop: Some(vec![]),
            ..base.clone()
        },
        ChatCompletionRequest {
            max_tokens: Some(1),
            n: Some(1),
            response_format: Some(ResponseFormat::Text),
            safe_prompt: Some(false),
            seed: Some(0),
            stream: Some(true),
            top_p: Some(1.0),
            ..base
        },
    ];

    for request in variants {
        let bytes = request.to_wire().unwrap();
        assert_eq!(ChatCompletionRequest::from_wire(&bytes).unwrap(), request);
    }
}

#[test]
fn absent_optionals_never_encode_as_null() {
    let request = ChatCompletionRequest::new(
        vec![Message::System {
            content: "x".to_owned(),
        }],
        "m",
    );
    let value: serde_json::Value = serde_json::from_slice(&request.to_wire().unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.values().all(|v| !v.is_null()));
}

#[test]
fn fal_training_flow_encodes_then_decodes() {
    let input = FluxLoraFastTrainingInput {
        images_data_url: "https://example.com/images.zip".to_owned(),
        trigger_word: Some("sks".to_owned()),
        steps: Some(1000),
        create_masks: Some(true),
        is_style: None,
    };
    let bytes = input.to_wire().unwrap();
    let wire: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(wire["trigger_word"], "sks");
    assert!(wire.get("is_style").is_none());

    let output = FluxLoraFastTrainingOutput::from_wire(
        &serde_json::to_vec(&json!({
            "diffusers_lora_file": {
                "content_type": "application/octet-stream",
                "file_name": "lora.safetensors",
                "file_size": 89_745_224u64,
                "url": "https://storage.fal.ai/lora.safetensors"
            }
        }))
        .unwrap(),
    )
    .unwrap();
    assert_eq!(
        output.diffusers_lora_file.unwrap().file_size,
        Some(89_745_224)
    );
}

#[test]
fn replicate_training_flow_is_tolerant_end_to_end() {
    let request = TrainingRequest {
        destination: "me/flux-ft".to_owned(),
        input: json!({"input_images": "https://example.com/images.zip"}),
        webhook: None,
    };
    let _bytes = request.to_wire().unwrap();

    // The response for the freshly-created training carries a logs field
    // the typed schema cannot represent; from_wire must still succeed.
    let response = serde_json::to_vec(&json!({
        "created_at": "2024-09-08T16:12:33.823992Z",
        "id": "zz4i",
        "logs": {"unexpected": "object"},
        "status": "starting",
        "urls": {"cancel": "https://api.replicate.com/v1/trainings/zz4i/cancel"}
    }))
    .unwrap();

    let training = TrainingResponse::from_wire(&response).unwrap();
    assert_eq!(training.status, Some(JobStatus::Starting));
    assert_eq!(training.logs, None);
}

#[test]
fn error_taxonomy_is_stable_across_entities() {
    assert!(matches!(
        decode::<TrainingResponse>(b"not json at all"),
        Err(WireError::MalformedPayload(_))
    ));
    assert_eq!(
        decode::<ChatCompletionRequest>(br#"{"messages":[]}"#).unwrap_err(),
        WireError::MissingRequiredField("model".to_owned())
    );
    assert_eq!(
        decode::<Message>(br#"{"role":"tool","content":"x"}"#).unwrap_err(),
        WireError::UnknownVariant("tool".to_owned())
    );
    assert!(matches!(
        decode::<TrainingResponse>(br#"{"metrics":{"predict_time":"fast"}}"#).unwrap_err(),
        WireError::TypeMismatch { ref field, .. } if field == "metrics.predict_time"
    ));
}
