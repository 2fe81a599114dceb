//! Media Player State Machine
//!
//! This example drives a small player through event-triggered transitions
//! and walks its history back and forth.
//!
//! Key concepts:
//! - Declaring a configuration with the machine_config! macro
//! - Event-driven transitions with trigger()
//! - Linear undo/redo over visited states
//!
//! Run with: cargo run --example media_player

use switchyard::{machine_config, StateMachine};

fn main() -> Result<(), switchyard::MachineError> {
    println!("=== Media Player State Machine ===\n");

    let config = machine_config! {
        initial: "idle",
        states: {
            "idle" => { "start" => "running" },
            "running" => { "stop" => "idle", "pause" => "paused" },
            "paused" => { "resume" => "running", "stop" => "idle" },
        }
    };

    let mut machine = StateMachine::new(config);
    println!("Initial state: {}", machine.state());

    for event in ["start", "pause", "resume"] {
        machine.trigger(event)?;
        println!("After '{}': {}", event, machine.state());
    }

    println!("\nVisited so far: {:?}", machine.history().visited());

    machine.undo();
    machine.undo();
    println!("After two undos: {}", machine.state());

    machine.redo();
    println!("After one redo: {}", machine.state());

    // A fresh move prunes the remaining redo chain.
    machine.trigger("stop")?;
    println!("After 'stop': {}", machine.state());
    println!("Pending redo entries: {:?}", machine.history().undone());

    println!("\nStates handling 'stop': {:?}", machine.states_on("stop"));

    Ok(())
}
