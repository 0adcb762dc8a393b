//! Application layer - Use cases and boundary contracts

pub mod dto;
pub mod ports;
pub mod services;
