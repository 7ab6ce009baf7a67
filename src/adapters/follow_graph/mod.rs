//! Follow graph adapters. Implement FollowGraphPort.

pub mod fixture;

pub use fixture::FixtureFollowGraph;
