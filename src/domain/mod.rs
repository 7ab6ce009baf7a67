//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    AppStatus, FollowStats, GroundingResult, GroundingSource, Locale, Profile, Recommendation,
    Vibe, VibeClassification, excerpt,
};
pub use errors::DomainError;
