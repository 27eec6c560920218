//! When steps for agent lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use a2a_bridge::discovery::domain::InvokeRequest;
use rstest_bdd_macros::when;

#[when("the connector is activated")]
fn activate_connector(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    world.activate_pending()
}

#[when("the connector is deactivated")]
fn deactivate_connector(world: &mut LifecycleWorld) {
    world.connector.deactivate();
}

#[when(r#"agent "{agent_id}" is invoked with text "{text}" and intent "{intent}""#)]
fn invoke_agent(world: &mut LifecycleWorld, agent_id: String, text: String, intent: String) {
    let request = InvokeRequest {
        input_text: Some(text),
        intent: Some(intent),
        parameters: None,
    };
    world.last_invocation = Some(world.service.invoke(&agent_id, request));
}
