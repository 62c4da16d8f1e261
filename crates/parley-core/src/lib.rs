//! Business logic and repository trait definitions for Parley.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, and the services that validate input and orchestrate
//! repository calls. It depends only on `parley-types` -- never on
//! `parley-infra` or any database crate.

pub mod repository;
pub mod service;
