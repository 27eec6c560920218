//! Given steps for agent lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use a2a_bridge::inbound::domain::ConnectorProperties;
use rstest_bdd_macros::given;

#[given(r#"a connector for agent "{agent_id}" with skills "{skills}""#)]
fn a_connector_for_agent(world: &mut LifecycleWorld, agent_id: String, skills: String) {
    world.pending = Some(ConnectorProperties::new(agent_id).with_skills(skills));
}

#[given("a connector with no agent id")]
fn a_connector_without_id(world: &mut LifecycleWorld) {
    world.pending = Some(ConnectorProperties::default().with_skills("freeze"));
}

#[given(r#"an active connector for agent "{agent_id}" with skills "{skills}""#)]
fn an_active_connector(
    world: &mut LifecycleWorld,
    agent_id: String,
    skills: String,
) -> Result<(), eyre::Report> {
    world.pending = Some(ConnectorProperties::new(agent_id).with_skills(skills));
    world.activate_pending()?;
    match world.last_activation.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected successful activation, got {other:?}")),
    }
}
