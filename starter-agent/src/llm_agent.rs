use crate::context::AgentToolContext;
use crate::trace::{end_span, start_span};
use async_stream::stream;
use async_trait::async_trait;
use futures::StreamExt;
use starter_core::{
    Agent, AgentConfig, Content, Event, EventStream, InvocationContext, Llm, LlmRequest,
    ModelBinding, Part, Result, StarterError, Tool, ToolContext, ToolKind, ToolSet,
};
use starter_telemetry::opentelemetry::KeyValue;
use starter_telemetry::spans::{AGENT_RUN, MODEL_CALL, TOOL_EXECUTE};
use starter_telemetry::{TraceExport, agent_run_span, model_call_span, tool_execute_span};
use std::sync::Arc;
use tracing::Instrument;

/// Upper bound on model round-trips caused by tool calls in one run.
pub const MAX_TOOL_ROUNDS: usize = 10;

pub struct LlmAgent {
    config: AgentConfig,
    model: Arc<dyn Llm>,
    trace_export: Option<TraceExport>,
}

impl std::fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAgent")
            .field("name", &self.config.name())
            .field("model", &self.model.name())
            .field("tools", self.config.tools())
            .field("traced", &self.trace_export.is_some())
            .finish()
    }
}

impl LlmAgent {
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn instruction(&self) -> &str {
        self.config.instruction()
    }

    pub fn tools(&self) -> &ToolSet {
        self.config.tools()
    }

    pub fn model(&self) -> &Arc<dyn Llm> {
        &self.model
    }

    pub fn is_traced(&self) -> bool {
        self.trace_export.is_some()
    }
}

pub struct LlmAgentBuilder {
    name: String,
    description: Option<String>,
    instruction: Option<String>,
    binding: Option<ModelBinding>,
    model: Option<Arc<dyn Llm>>,
    tools: Vec<Arc<dyn Tool>>,
    trace_export: Option<TraceExport>,
}

impl LlmAgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            instruction: None,
            binding: None,
            model: None,
            tools: Vec::new(),
            trace_export: None,
        }
    }

    pub fn from_config(config: AgentConfig) -> Self {
        Self {
            name: config.name().to_string(),
            description: Some(config.description().to_string()),
            instruction: Some(config.instruction().to_string()),
            binding: Some(config.model().clone()),
            model: None,
            tools: config.tools().iter().cloned().collect(),
            trace_export: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Bind the agent to a model; resolved at `build` without network access.
    pub fn model_binding(mut self, binding: ModelBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Use an already-built model instead of resolving the binding.
    ///
    /// Without a binding the model is recorded as hosted under its own name.
    pub fn model(mut self, model: Arc<dyn Llm>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn trace_export(mut self, export: TraceExport) -> Self {
        self.trace_export = Some(export);
        self
    }

    pub fn build(self) -> Result<LlmAgent> {
        let binding = match (self.binding, &self.model) {
            (Some(binding), _) => binding,
            (None, Some(model)) => ModelBinding::hosted(model.name()),
            (None, None) => {
                return Err(StarterError::Config(format!(
                    "Agent '{}' requires a model",
                    self.name
                )));
            }
        };

        let mut config = AgentConfig::builder(self.name)
            .instruction(self.instruction.unwrap_or_default())
            .model(binding)
            .tools(self.tools);
        if let Some(description) = self.description {
            config = config.description(description);
        }
        let config = config.build()?;

        let model = match self.model {
            Some(model) => model,
            None => starter_model::resolve_model(config.model())?,
        };

        tracing::debug!(
            agent.name = config.name(),
            model.name = model.name(),
            tools = ?config.tools().names(),
            traced = self.trace_export.is_some(),
            "Agent built"
        );

        Ok(LlmAgent { config, model, trace_export: self.trace_export })
    }
}

#[async_trait]
impl Agent for LlmAgent {
    fn name(&self) -> &str {
        self.config.name()
    }

    fn description(&self) -> &str {
        self.config.description()
    }

    async fn run(&self, ctx: Arc<dyn InvocationContext>) -> Result<EventStream> {
        let agent_name = self.config.name().to_string();
        let invocation_id = ctx.invocation_id().to_string();
        let instruction = self.config.instruction().to_string();
        let tools = self.config.tools().clone();
        let tool_declarations = tools.declarations();
        let model = self.model.clone();
        let trace_export = self.trace_export.clone();

        let run_span = agent_run_span(&agent_name, &invocation_id);

        let s = stream! {
            tracing::info!(agent.name = %agent_name, invocation.id = %invocation_id, "Starting agent execution");

            let agent_cx = start_span(
                trace_export.as_ref(),
                None,
                AGENT_RUN,
                vec![
                    KeyValue::new("agent.name", agent_name.clone()),
                    KeyValue::new("invocation.id", invocation_id.clone()),
                ],
            );

            let mut history = vec![ctx.user_content().clone()];
            let mut round = 0;

            loop {
                round += 1;
                if round > MAX_TOOL_ROUNDS {
                    let message = format!("Max tool rounds ({}) exceeded", MAX_TOOL_ROUNDS);
                    end_span(agent_cx, Some(&message));
                    yield Err(StarterError::Agent(message));
                    return;
                }

                let request = LlmRequest::new(model.name(), history.clone())
                    .with_system_instruction(instruction.clone())
                    .with_tools(tool_declarations.clone());

                let model_cx = start_span(
                    trace_export.as_ref(),
                    agent_cx.as_ref(),
                    MODEL_CALL,
                    vec![KeyValue::new("model.name", model.name().to_string())],
                );

                let mut responses = match model
                    .generate_content(request)
                    .instrument(run_span.in_scope(|| model_call_span(model.name())))
                    .await
                {
                    Ok(responses) => responses,
                    Err(e) => {
                        let message = e.to_string();
                        end_span(model_cx, Some(&message));
                        end_span(agent_cx, Some(&message));
                        yield Err(e);
                        return;
                    }
                };

                let mut accumulated: Option<Content> = None;
                while let Some(chunk) = responses.next().await {
                    let chunk = match chunk {
                        Ok(chunk) => chunk,
                        Err(e) => {
                            let message = e.to_string();
                            tracing::warn!(error = %message, "model call failed");
                            end_span(model_cx, Some(&message));
                            end_span(agent_cx, Some(&message));
                            yield Err(e);
                            return;
                        }
                    };

                    let turn_complete = chunk.turn_complete;
                    if let Some(content) = &chunk.content {
                        match accumulated.as_mut() {
                            Some(acc) => acc.parts.extend(content.parts.iter().cloned()),
                            None => accumulated = Some(content.clone()),
                        }
                    }

                    let mut event = Event::new(&invocation_id).with_author(&agent_name);
                    event.llm_response = chunk;
                    yield Ok(event);

                    if turn_complete {
                        break;
                    }
                }
                end_span(model_cx, None);

                let Some(content) = accumulated else {
                    break;
                };

                let calls: Vec<(String, serde_json::Value, Option<String>)> = content
                    .function_calls()
                    .map(|(name, args, id)| (name.to_string(), args.clone(), id.map(str::to_string)))
                    .collect();
                history.push(content);

                if calls.is_empty() {
                    break;
                }

                for (name, args, call_id) in calls {
                    let function_call_id =
                        call_id.clone().unwrap_or_else(|| format!("{}_{}", invocation_id, name));
                    let tool_cx = start_span(
                        trace_export.as_ref(),
                        agent_cx.as_ref(),
                        TOOL_EXECUTE,
                        vec![KeyValue::new("tool.name", name.clone())],
                    );

                    let (result, error) = match tools.get(&name) {
                        Some(tool) => {
                            if tool.kind() == ToolKind::Builtin {
                                tracing::warn!(tool.name = %name, "model returned a call for a built-in tool");
                            }
                            let tool_ctx: Arc<dyn ToolContext> = Arc::new(AgentToolContext::new(
                                ctx.clone(),
                                agent_name.clone(),
                                function_call_id,
                            ));
                            match tool
                                .execute(tool_ctx, args)
                                .instrument(run_span.in_scope(|| tool_execute_span(&name)))
                                .await
                            {
                                Ok(result) => (result, None),
                                Err(e) => {
                                    let message = e.to_string();
                                    (serde_json::json!({ "error": message.clone() }), Some(message))
                                }
                            }
                        }
                        None => {
                            let message = format!("Tool {} not found", name);
                            (serde_json::json!({ "error": message.clone() }), Some(message))
                        }
                    };
                    end_span(tool_cx, error.as_deref());

                    let response = Content {
                        role: "function".to_string(),
                        parts: vec![Part::function_response(name, result, call_id)],
                    };

                    let mut event = Event::new(&invocation_id).with_author(&agent_name);
                    event.set_content(response.clone());
                    yield Ok(event);

                    history.push(response);
                }
            }

            end_span(agent_cx, None);
            tracing::info!(agent.name = %agent_name, rounds = round, "Agent execution complete");
        };

        Ok(Box::pin(s))
    }
}
