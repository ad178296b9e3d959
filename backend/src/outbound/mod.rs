//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM.
//! - **memory**: volatile repositories used when no database is configured
//!   and by tests.
//!
//! Adapters translate between domain records and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
