// Feedback Engine
// Implements: transcript serialization, rubric prompt, scorecard parsing with
// fallback, report persistence, and the presentation-level aggregator.

pub mod aggregate;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod scorecard;
