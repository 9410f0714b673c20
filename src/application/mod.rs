//! Application layer containing the cart orchestration logic.
//!
//! This module defines the `CartEngine`, the primary entry point for cart
//! mutations and total derivations. It owns the storage backend and keeps the
//! persisted slot in sync with the in-memory cart after every mutation.

pub mod engine;
