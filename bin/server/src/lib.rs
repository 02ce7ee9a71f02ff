//! HTTP server for the motochat shop assistant.
//!
//! The binary wires the conversation store, the catalog variant chosen by
//! configuration, and the generative backend into the message router, and
//! exposes the JSON chat API plus static asset serving.

pub mod config;
pub mod error;
pub mod image_data;
pub mod routes;
pub mod state;
