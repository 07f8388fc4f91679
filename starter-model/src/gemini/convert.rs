//! Wire types for `models/{model}:generateContent`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use starter_core::{
    Content, FinishReason, LlmRequest, LlmResponse, Part, ToolDeclaration, ToolKind, UsageMetadata,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<WireContent>,
    pub contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<WireUsage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<WireContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUsage {
    pub prompt_token_count: Option<i32>,
    pub candidates_token_count: Option<i32>,
    pub total_token_count: Option<i32>,
}

pub fn build_request(request: &LlmRequest) -> GenerateContentRequest {
    let generation_config = request.config.as_ref().map(|c| GenerationConfig {
        temperature: c.temperature,
        top_p: c.top_p,
        max_output_tokens: c.max_output_tokens,
    });

    GenerateContentRequest {
        system_instruction: request.system_instruction.as_ref().map(|text| WireContent {
            role: None,
            parts: vec![json!({ "text": text })],
        }),
        contents: request.contents.iter().map(content_to_wire).collect(),
        tools: convert_tools(&request.tools),
        generation_config,
    }
}

/// Gemini only knows `user` and `model`. Function results travel as user turns.
pub fn content_to_wire(content: &Content) -> WireContent {
    let role = match content.role.as_str() {
        "model" | "assistant" => "model",
        _ => "user",
    };

    let parts = content
        .parts
        .iter()
        .map(|part| match part {
            Part::Text { text } => json!({ "text": text }),
            Part::FunctionCall { name, args, .. } => {
                json!({ "functionCall": { "name": name, "args": args } })
            }
            Part::FunctionResponse { function_response, .. } => {
                let response = if function_response.response.is_object() {
                    function_response.response.clone()
                } else {
                    json!({ "result": function_response.response })
                };
                json!({ "functionResponse": { "name": function_response.name, "response": response } })
            }
        })
        .collect();

    WireContent { role: Some(role.to_string()), parts }
}

/// Built-in search becomes a `googleSearch` tool; functions are grouped into one declaration block.
pub fn convert_tools(tools: &[ToolDeclaration]) -> Vec<Value> {
    let mut wire = Vec::new();
    let mut functions = Vec::new();

    for decl in tools {
        match decl.kind {
            ToolKind::Builtin if decl.name == "google_search" => wire.push(json!({ "googleSearch": {} })),
            ToolKind::Builtin => {
                tracing::warn!(tool.name = %decl.name, "unknown built-in tool for Gemini; skipping");
            }
            ToolKind::Function => {
                let mut function = json!({ "name": decl.name, "description": decl.description });
                if let Some(params) = &decl.parameters {
                    function["parameters"] = params.clone();
                }
                functions.push(function);
            }
        }
    }

    if !functions.is_empty() {
        wire.push(json!({ "functionDeclarations": functions }));
    }
    wire
}

pub fn from_response(response: &GenerateContentResponse) -> LlmResponse {
    let candidate = response.candidates.first();

    let content = candidate.and_then(|c| c.content.as_ref()).map(|wire| {
        let parts = wire
            .parts
            .iter()
            .filter_map(|part| {
                if let Some(text) = part.get("text").and_then(Value::as_str) {
                    return Some(Part::Text { text: text.to_string() });
                }
                part.get("functionCall").map(|call| Part::FunctionCall {
                    name: call.get("name").and_then(Value::as_str).unwrap_or_default().to_string(),
                    args: call.get("args").cloned().unwrap_or_else(|| json!({})),
                    id: None,
                })
            })
            .collect();
        Content { role: "model".to_string(), parts }
    });

    let finish_reason = candidate.and_then(|c| c.finish_reason.as_deref()).map(|fr| match fr {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        "RECITATION" => FinishReason::Recitation,
        _ => FinishReason::Other,
    });

    LlmResponse {
        content,
        usage_metadata: response.usage_metadata.as_ref().map(|u| UsageMetadata {
            prompt_token_count: u.prompt_token_count.unwrap_or(0),
            candidates_token_count: u.candidates_token_count.unwrap_or(0),
            total_token_count: u.total_token_count.unwrap_or(0),
        }),
        finish_reason,
        partial: false,
        turn_complete: true,
    }
}
