// Composition root for the event collector.
//
// - Read config from the environment.
// - Build the dataset store and codec registry once.
// - Wire them into the route handlers through `AppState`.

pub mod config;
pub mod http;
pub mod state;
