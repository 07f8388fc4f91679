//! OpenTelemetry spans emitted through an injected [`TraceExport`].

use starter_telemetry::TraceExport;
use starter_telemetry::opentelemetry::trace::{
    Status, TraceContextExt, Tracer as _,
};
use starter_telemetry::opentelemetry::{Context, KeyValue};

/// Start `name` as a child of `parent`, or as a root span. `None` when no export is injected.
pub(crate) fn start_span(
    export: Option<&TraceExport>,
    parent: Option<&Context>,
    name: &'static str,
    attributes: Vec<KeyValue>,
) -> Option<Context> {
    let export = export?;
    let tracer = export.tracer();
    let builder = tracer.span_builder(name).with_attributes(attributes);
    let parent = parent.cloned().unwrap_or_default();
    let span = builder.start_with_context(&tracer, &parent);
    Some(parent.with_span(span))
}

pub(crate) fn end_span(cx: Option<Context>, error: Option<&str>) {
    if let Some(cx) = cx {
        let span = cx.span();
        if let Some(message) = error {
            span.set_status(Status::error(message.to_string()));
        }
        span.end();
    }
}
