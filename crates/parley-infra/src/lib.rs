//! Infrastructure layer for Parley.
//!
//! Contains the PostgreSQL implementations of the repository traits defined
//! in `parley-core`, the connection pool, and the embedded migrations.

pub mod postgres;
