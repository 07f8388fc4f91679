//! Send one message to a sample agent and print the reply.
//!
//! ```text
//! cargo run -p starter-samples --example chat -- google_search_agent "Who won the last World Cup?"
//! ```

use futures::StreamExt;
use starter_agent::SimpleInvocationContext;
use starter_core::{AgentLoader, Result};
use std::sync::Arc;

// Spans are flushed after the runtime is dropped; flushing blocks.
fn main() -> Result<()> {
    starter_samples::settings::load_dotenv();
    starter_telemetry::init_telemetry("starter-samples")?;

    let mut args = std::env::args().skip(1);
    let agent_name = args.next().unwrap_or_default();
    let message = args.next().unwrap_or_else(|| "Hello!".to_string());

    let traced = std::env::var("TRACE_API_KEY").is_ok_and(|k| !k.is_empty());
    let (loader, export) = if traced {
        let (loader, export) = starter_samples::traced_loader()?;
        (loader, Some(export))
    } else {
        (starter_samples::loader()?, None)
    };

    let agent = loader.load_agent(&agent_name)?;
    let ctx = Arc::new(SimpleInvocationContext::from_text(message));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut events = agent.run(ctx).await?;
        while let Some(event) = events.next().await {
            let event = event?;
            if let Some(content) = event.content() {
                let text = content.text();
                if !text.is_empty() {
                    println!("[{}] {}", event.author, text);
                }
            }
        }
        Ok::<(), starter_core::StarterError>(())
    })?;
    drop(runtime);

    if let Some(export) = export {
        export.force_flush()?;
        starter_telemetry::shutdown_telemetry();
    }
    Ok(())
}
