//! Domain layer: the cart state machine and the storage port it persists through.

pub mod cart;
pub mod line;
pub mod ports;
