// Rocket basics, i.e. the JSON error responder and the CORS fairing.
pub mod basics;
// Rocket-based database infra
pub mod database;
