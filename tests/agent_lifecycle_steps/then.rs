//! Then steps for agent lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use a2a_bridge::discovery::{domain::InvokeRequest, services::DiscoveryError};
use a2a_bridge::inbound::services::InboundConnectorError;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("exactly one agent is listed")]
fn one_agent_listed(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    expect_listed_count(world, 1)
}

#[then("no agents are listed")]
fn no_agents_listed(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    expect_listed_count(world, 0)
}

fn expect_listed_count(world: &LifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.service.list_agents();
    if listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} agents, found {}",
            listed.len()
        ));
    }
    if world.registry.len() != count {
        return Err(eyre::eyre!("registry and listing disagree"));
    }
    Ok(())
}

#[then(r#"agent "{agent_id}" is listed"#)]
fn agent_is_listed(world: &LifecycleWorld, agent_id: String) -> Result<(), eyre::Report> {
    if !world
        .service
        .list_agents()
        .iter()
        .any(|summary| summary.id == agent_id)
    {
        return Err(eyre::eyre!("expected agent '{agent_id}' to be listed"));
    }
    Ok(())
}

#[then(r#"the invocation reports skill "{skill}""#)]
fn invocation_reports_skill(world: &LifecycleWorld, skill: String) -> Result<(), eyre::Report> {
    let response = match world.last_invocation.as_ref() {
        Some(Ok(response)) => response,
        other => return Err(eyre::eyre!("expected successful invocation, got {other:?}")),
    };
    if response.result.get("skillsUsed") != Some(&json!(skill)) {
        return Err(eyre::eyre!(
            "expected skill '{skill}', got {:?}",
            response.result.get("skillsUsed")
        ));
    }
    Ok(())
}

#[then(r#"the owning process receives request "{text}""#)]
fn process_receives_request(world: &mut LifecycleWorld, text: String) -> Result<(), eyre::Report> {
    let events = world
        .events
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no correlation channel in scenario world"))?;
    let event = events
        .try_recv()
        .map_err(|err| eyre::eyre!("no correlation event delivered: {err}"))?;
    if event.variables.get("userRequest") != Some(&json!(text)) {
        return Err(eyre::eyre!(
            "expected userRequest '{text}', got {:?}",
            event.variables
        ));
    }
    Ok(())
}

#[then(r#"invoking agent "{agent_id}" fails as not found"#)]
fn invoking_fails_not_found(world: &LifecycleWorld, agent_id: String) -> Result<(), eyre::Report> {
    let result = world.service.invoke(&agent_id, InvokeRequest::default());
    if !matches!(result, Err(DiscoveryError::NotFound(_))) {
        return Err(eyre::eyre!("expected not-found error, got {result:?}"));
    }
    Ok(())
}

#[then("activation fails with a configuration error")]
fn activation_fails_with_configuration_error(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_activation
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing activation result in scenario world"))?;
    if !matches!(result, Err(InboundConnectorError::Configuration(_))) {
        return Err(eyre::eyre!("expected configuration error, got {result:?}"));
    }
    Ok(())
}
