//! Infrastructure layer - Adapters and wiring

pub mod config;
pub mod locks;
pub mod persistence;
pub mod state;
pub mod telemetry;
