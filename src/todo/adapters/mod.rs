//! Adapter implementations for the todo repository port.

pub mod memory;
pub mod postgres;
