//! Client library for the direwolf test-orchestration API
//!
//! Resolves a cloud (a named test environment identified by domain and
//! region), dispatches a suite run against it, and polls the run until the
//! server reports an end time.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
