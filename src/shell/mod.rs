// Composition root for the movies service.
//
// Responsibilities
// - Read config from the environment.
// - Install the tracing subscriber.
// - Instantiate the in memory repository and wire it into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
