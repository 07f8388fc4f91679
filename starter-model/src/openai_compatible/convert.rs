//! Wire types and conversions for the chat-completions API.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use starter_core::{
    Content, FinishReason, LlmRequest, LlmResponse, Part, ToolDeclaration, ToolKind, UsageMetadata,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDef,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Build the request body. Built-in tools have no chat-completions equivalent and are dropped.
pub fn build_request(model: &str, request: &LlmRequest, max_tokens: Option<u32>) -> ChatCompletionRequest {
    let mut messages = Vec::new();
    if let Some(instruction) = &request.system_instruction {
        messages.push(Message {
            role: "system".to_string(),
            content: Some(instruction.clone()),
            tool_calls: None,
            tool_call_id: None,
        });
    }
    for content in &request.contents {
        messages.extend(content_to_messages(content));
    }

    let tools = convert_tools(&request.tools);
    let config = request.config.as_ref();

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: config.and_then(|c| c.temperature),
        top_p: config.and_then(|c| c.top_p),
        max_tokens: config.and_then(|c| c.max_output_tokens).map(|t| t as u32).or(max_tokens),
        tools: if tools.is_empty() { None } else { Some(tools) },
    }
}

/// One content may carry several function responses; each becomes its own `tool` message.
pub fn content_to_messages(content: &Content) -> Vec<Message> {
    let role = match content.role.as_str() {
        "model" | "assistant" => "assistant",
        "tool" | "function" => "tool",
        other => other,
    };

    let mut text_parts = Vec::new();
    let mut tool_calls = Vec::new();
    let mut tool_messages = Vec::new();

    for part in &content.parts {
        match part {
            Part::Text { text } => text_parts.push(text.clone()),
            Part::FunctionCall { name, args, id } => {
                tool_calls.push(ToolCall {
                    id: id.clone().unwrap_or_else(|| format!("call_{}", tool_calls.len())),
                    call_type: "function".to_string(),
                    function: FunctionCall {
                        name: name.clone(),
                        arguments: serde_json::to_string(args).unwrap_or_default(),
                    },
                });
            }
            Part::FunctionResponse { function_response, id } => {
                tool_messages.push(Message {
                    role: "tool".to_string(),
                    content: Some(
                        serde_json::to_string(&function_response.response).unwrap_or_default(),
                    ),
                    tool_calls: None,
                    tool_call_id: id.clone(),
                });
            }
        }
    }

    if !tool_messages.is_empty() {
        return tool_messages;
    }

    vec![Message {
        role: role.to_string(),
        content: if text_parts.is_empty() { None } else { Some(text_parts.join("\n")) },
        tool_calls: if tool_calls.is_empty() { None } else { Some(tool_calls) },
        tool_call_id: None,
    }]
}

pub fn convert_tools(tools: &[ToolDeclaration]) -> Vec<Tool> {
    tools
        .iter()
        .filter(|decl| {
            if decl.kind == ToolKind::Builtin {
                tracing::warn!(tool.name = %decl.name, "built-in tool is not supported by OpenAI-compatible endpoints; skipping");
                return false;
            }
            true
        })
        .map(|decl| Tool {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: decl.name.clone(),
                description: decl.description.clone(),
                parameters: decl
                    .parameters
                    .clone()
                    .unwrap_or_else(|| json!({ "type": "object", "properties": {} })),
            },
        })
        .collect()
}

pub fn from_response(response: &ChatCompletionResponse) -> LlmResponse {
    let choice = response.choices.first();

    let finish_reason = choice.and_then(|c| c.finish_reason.as_deref()).map(|fr| match fr {
        "stop" | "tool_calls" => FinishReason::Stop,
        "length" => FinishReason::MaxTokens,
        "content_filter" => FinishReason::Safety,
        _ => FinishReason::Other,
    });

    let mut parts = Vec::new();
    if let Some(msg) = choice.and_then(|c| c.message.as_ref()) {
        if let Some(text) = msg.content.as_ref().filter(|t| !t.is_empty()) {
            parts.push(Part::Text { text: text.clone() });
        }
        for tc in msg.tool_calls.iter().flatten() {
            let args: Value = serde_json::from_str(&tc.function.arguments).unwrap_or(json!({}));
            parts.push(Part::FunctionCall {
                name: tc.function.name.clone(),
                args,
                id: Some(tc.id.clone()),
            });
        }
    }

    LlmResponse {
        content: if parts.is_empty() {
            None
        } else {
            Some(Content { role: "model".to_string(), parts })
        },
        usage_metadata: response.usage.as_ref().map(|u| UsageMetadata {
            prompt_token_count: u.prompt_tokens as i32,
            candidates_token_count: u.completion_tokens as i32,
            total_token_count: u.total_tokens as i32,
        }),
        finish_reason,
        partial: false,
        turn_complete: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, kind: ToolKind) -> ToolDeclaration {
        ToolDeclaration {
            name: name.to_string(),
            description: format!("{name} tool"),
            parameters: None,
            kind,
        }
    }

    #[test]
    fn test_system_instruction_leads_messages() {
        let request = LlmRequest::new("m", vec![Content::new("user").with_text("hello")])
            .with_system_instruction("You are a helpful agent who can chat with the user.");
        let body = build_request("openai/gpt-oss-20b", &request, None);

        assert_eq!(body.model, "openai/gpt-oss-20b");
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[0].role, "system");
        assert_eq!(body.messages[1].role, "user");
        assert!(body.tools.is_none());
    }

    #[test]
    fn test_builtin_tools_are_dropped() {
        let tools =
            convert_tools(&[decl("google_search", ToolKind::Builtin), decl("lookup", ToolKind::Function)]);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].function.name, "lookup");
        assert_eq!(tools[0].function.parameters["type"], "object");
    }

    #[test]
    fn test_function_responses_split_into_tool_messages() {
        let content = Content {
            role: "function".to_string(),
            parts: vec![
                Part::function_response("a", json!({"x": 1}), Some("call_a".to_string())),
                Part::function_response("b", json!({"y": 2}), Some("call_b".to_string())),
            ],
        };
        let messages = content_to_messages(&content);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.role == "tool"));
        assert_eq!(messages[1].tool_call_id.as_deref(), Some("call_b"));
    }

    #[test]
    fn test_from_response_with_tool_call() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "lookup", "arguments": "{\"q\":\"rust\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 4, "total_tokens": 7}
        }))
        .unwrap();

        let llm_response = from_response(&response);
        let content = llm_response.content.unwrap();
        let calls: Vec<_> = content.function_calls().collect();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "lookup");
        assert_eq!(calls[0].1["q"], "rust");
        assert_eq!(calls[0].2, Some("call_1"));
        assert_eq!(llm_response.usage_metadata.unwrap().total_token_count, 7);
    }
}
