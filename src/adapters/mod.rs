//! Infrastructure adapters. Implement outbound ports.
//!
//! Gemini, fixture follow graph, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod follow_graph;
pub mod ui;
