pub mod appstate;
pub mod configuration;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
pub mod utils;
