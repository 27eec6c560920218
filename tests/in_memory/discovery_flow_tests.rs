//! Activation, discovery and invocation through the shared registry.

use super::helpers::{activate, discovery, registry};
use a2a_bridge::agent_registry::adapters::memory::AgentRegistry;
use a2a_bridge::discovery::{
    domain::{InvokeRequest, InvokeStatus},
    services::DiscoveryError,
};
use a2a_bridge::inbound::domain::ConnectorState;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activated_agents_are_listed_and_carded(registry: AgentRegistry) {
    let _card = activate(&registry, "card-agent", "freeze, unfreeze, freeze");
    let _faq = activate(&registry, "faq-agent", "");
    let service = discovery(&registry);

    let mut listed: Vec<_> = service
        .list_agents()
        .into_iter()
        .map(|summary| (summary.id, summary.skills))
        .collect();
    listed.sort();
    assert_eq!(
        listed,
        [
            (
                "card-agent".to_owned(),
                vec!["freeze".to_owned(), "unfreeze".to_owned()]
            ),
            ("faq-agent".to_owned(), Vec::new()),
        ]
    );

    let card = service.card("card-agent").expect("card should exist");
    assert_eq!(card.id, "agent:card-agent");
    assert_eq!(card.description, "Skills: freeze, unfreeze");
    let action = card.actions.first().expect("invoke action");
    assert_eq!(action.href, "/a2a/agents/card-agent/invoke");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invocation_reaches_the_owning_process(registry: AgentRegistry) {
    let mut agent = activate(&registry, "card-agent", "freeze,unfreeze");
    let service = discovery(&registry);

    let response = service
        .invoke(
            "card-agent",
            InvokeRequest {
                input_text: Some("unfreeze my card".to_owned()),
                intent: Some("UNFREEZE".to_owned()),
                parameters: None,
            },
        )
        .expect("invocation should succeed");

    assert_eq!(response.status, InvokeStatus::Ok);
    assert_eq!(response.message, "Agent card-agent executed.");
    assert_eq!(response.result.get("skillsUsed"), Some(&json!("unfreeze")));
    assert_eq!(
        response.result.get("echo"),
        Some(&json!({
            "inputText": "unfreeze my card",
            "intent": "UNFREEZE",
            "parameters": {}
        }))
    );

    let event = agent.events.recv().await.expect("event should be delivered");
    assert_eq!(event.source, "card-agent");
    assert_eq!(
        event.variables.get("userRequest"),
        Some(&json!("unfreeze my card"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invocation_without_text_sends_null_request(registry: AgentRegistry) {
    let mut agent = activate(&registry, "faq-agent", "");
    let service = discovery(&registry);

    let response = service
        .invoke("faq-agent", InvokeRequest::default())
        .expect("invocation should succeed");
    assert_eq!(response.result.get("skillsUsed"), Some(&json!("default")));

    let event = agent.events.recv().await.expect("event should be delivered");
    assert_eq!(event.variables.get("userRequest"), Some(&Value::Null));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_agent_disappears(registry: AgentRegistry) {
    let mut agent = activate(&registry, "card-agent", "freeze");
    let service = discovery(&registry);

    agent.connector.deactivate();

    assert_eq!(agent.connector.state(), ConnectorState::Inactive);
    assert!(service.list_agents().is_empty());
    assert!(matches!(
        service.card("card-agent"),
        Err(DiscoveryError::NotFound(id)) if id == "card-agent"
    ));
    assert!(matches!(
        service.invoke("card-agent", InvokeRequest::default()),
        Err(DiscoveryError::NotFound(_))
    ));
    assert!(agent.events.try_recv().is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropped_engine_side_fails_invocation(registry: AgentRegistry) {
    let agent = activate(&registry, "card-agent", "freeze");
    drop(agent.events);
    let service = discovery(&registry);

    let result = service.invoke("card-agent", InvokeRequest::default());

    assert!(matches!(result, Err(DiscoveryError::Correlation(_))));
}
