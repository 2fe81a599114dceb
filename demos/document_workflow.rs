//! Document Workflow
//!
//! This example loads a configuration from its JSON wire format, drives a
//! document through review, and shows how failed operations leave the
//! machine untouched.
//!
//! Run with: cargo run --example document_workflow

use switchyard::{MachineConfig, StateMachine};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "retract": "draft" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Workflow ===\n");

    let config = MachineConfig::from_json(WORKFLOW)?;
    let mut machine = StateMachine::new(config);

    println!("Configured states: {:?}", machine.state_names());
    println!("Starting in: {}\n", machine.state());

    machine.trigger("submit")?;
    println!("Submitted -> {}", machine.state());

    machine.trigger("reject")?;
    println!("Rejected  -> {}", machine.state());

    machine.trigger("submit")?;
    machine.trigger("approve")?;
    println!("Approved  -> {}", machine.state());

    // An invalid event is reported and changes nothing.
    if let Err(error) = machine.trigger("submit") {
        println!("\nRefused: {error}");
        println!("Still in: {}", machine.state());
    }

    println!("\nFull path: {:?}", machine.history().visited());

    // Jump back to the start of the review trail.
    while machine.undo() {}
    println!("After rewinding: {}", machine.state());

    Ok(())
}
