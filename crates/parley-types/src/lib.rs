//! Shared domain types for Parley.
//!
//! This crate contains the domain types used across the Parley service:
//! Chat, Message, their insert payloads, the error taxonomy, and the
//! configuration types the binary assembles from the environment.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod chat;
pub mod config;
pub mod error;
pub mod message;
