//! vibe-check: Farcaster non-follower finder with Gemini vibe checks, in Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
