//! Registry access from many tasks at once.

use super::helpers::{activate, discovery, registry};
use a2a_bridge::agent_registry::adapters::memory::AgentRegistry;
use a2a_bridge::discovery::{domain::InvokeRequest, services::DiscoveryError};
use rstest::rstest;

const AGENT_COUNT: usize = 64;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_activations_are_all_visible(registry: AgentRegistry) {
    let handles: Vec<_> = (0..AGENT_COUNT)
        .map(|n| {
            let shared = registry.clone();
            tokio::spawn(async move { activate(&shared, &format!("agent-{n}"), "skill") })
        })
        .collect();

    let mut agents = Vec::with_capacity(AGENT_COUNT);
    for handle in handles {
        agents.push(handle.await.expect("activation task should finish"));
    }

    assert_eq!(registry.len(), AGENT_COUNT);
    assert_eq!(discovery(&registry).list_agents().len(), AGENT_COUNT);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invocations_race_deactivation_without_corruption(registry: AgentRegistry) {
    let mut agent = activate(&registry, "card-agent", "freeze");
    let service = discovery(&registry);

    let invokers: Vec<_> = (0..AGENT_COUNT)
        .map(|_| {
            let surface = service.clone();
            tokio::spawn(async move { surface.invoke("card-agent", InvokeRequest::default()) })
        })
        .collect();
    agent.connector.deactivate();

    let mut delivered = 0_usize;
    for invoker in invokers {
        match invoker.await.expect("invoke task should finish") {
            Ok(_) => delivered += 1,
            Err(DiscoveryError::NotFound(_)) => {}
            Err(other) => panic!("unexpected invocation error: {other}"),
        }
    }

    let mut received = 0_usize;
    while agent.events.try_recv().is_ok() {
        received += 1;
    }
    assert_eq!(received, delivered);
    assert!(registry.is_empty());
}
