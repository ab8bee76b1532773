//! Core types shared across ActReader facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! logging facility and by error reporting, so every crate in the workspace
//! emits the same structured shape.

pub mod schema;
