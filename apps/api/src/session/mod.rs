// Interview Session
// Implements: the static conversation workflow graph handed to the external
// voice runtime, and the client-side mirror of its session state machine.
// The runtime walks the graph; this module only declares its shape.

pub mod driver;
pub mod handlers;
pub mod workflow;
