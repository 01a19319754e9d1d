//! Consolidated test utilities for metaphorever
//!
//! Every test runs the real binary against its own temporary
//! `METAPHOREVER_HOME`, with the API key removed so nothing reaches the network.

pub mod assertions;
pub mod fixtures;
pub mod home;
