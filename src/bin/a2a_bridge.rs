//! Runs the A2A bridge as a standalone HTTP service.
//!
//! Usage:
//!
//! ```text
//! A2A_BRIDGE_AGENTS="card-agent=freeze,unfreeze" a2a_bridge
//! ```
//!
//! Each entry in `A2A_BRIDGE_AGENTS` is activated as an inbound connector at
//! startup. Correlation events are drained by a logging task that stands in
//! for the orchestration engine. The discovery surface is served under
//! `/a2a` and the outbound function under `/engine/outbound`. Ctrl-C stops
//! the server and deactivates every connector.

use a2a_bridge::agent_registry::adapters::channel::{ChannelCorrelationHandle, CorrelationEvent};
use a2a_bridge::agent_registry::adapters::memory::AgentRegistry;
use a2a_bridge::config::BridgeConfig;
use a2a_bridge::discovery::adapters::http as discovery_http;
use a2a_bridge::discovery::services::DiscoveryService;
use a2a_bridge::inbound::adapters::PropertiesActivationContext;
use a2a_bridge::inbound::services::InboundConnector;
use a2a_bridge::outbound::adapters::{ReqwestTransport, http as outbound_http};
use a2a_bridge::outbound::services::OutboundDispatcher;
use a2a_bridge::telemetry::init_tracing;
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = BridgeConfig::from_env()?;

    let registry = AgentRegistry::new();
    let (sender, receiver) = mpsc::unbounded_channel();
    let drain = tokio::spawn(drain_events(receiver));

    let mut connectors = activate_connectors(&config, &registry, &sender)?;
    drop(sender);

    let discovery = DiscoveryService::new(registry);
    let manifest = discovery.manifest();
    let transport = ReqwestTransport::new(config.connect_timeout(), config.request_timeout())?;
    let dispatcher = OutboundDispatcher::new(Arc::new(transport));
    let app = discovery_http::router(discovery).merge(outbound_http::router(dispatcher));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        bind_addr = %config.bind_addr(),
        service = %manifest.service,
        version = %manifest.version,
        agents = connectors.len(),
        "a2a bridge listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    for connector in &mut connectors {
        connector.deactivate();
    }
    drop(connectors);
    if let Err(err) = drain.await {
        tracing::warn!(error = %err, "correlation drain task failed");
    }
    tracing::info!("a2a bridge stopped");
    Ok(())
}

fn activate_connectors(
    config: &BridgeConfig,
    registry: &AgentRegistry,
    sender: &UnboundedSender<CorrelationEvent>,
) -> Result<Vec<InboundConnector<DefaultClock>>, BoxError> {
    let clock = Arc::new(DefaultClock);
    config
        .agents()
        .iter()
        .map(|properties| -> Result<_, BoxError> {
            let source = properties.agent_id().unwrap_or_default().to_owned();
            let handle = Arc::new(ChannelCorrelationHandle::new(source, sender.clone()));
            let context = PropertiesActivationContext::from_properties(properties, handle)?;
            let mut connector = InboundConnector::new(registry.clone(), Arc::clone(&clock));
            connector.activate(&context)?;
            Ok(connector)
        })
        .collect()
}

async fn drain_events(mut receiver: UnboundedReceiver<CorrelationEvent>) {
    while let Some(event) = receiver.recv().await {
        tracing::info!(
            event_id = %event.event_id,
            source = %event.source,
            variables = %serde_json::Value::Object(event.variables),
            "correlation event received"
        );
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
