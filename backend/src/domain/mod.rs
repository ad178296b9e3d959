//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed records served by the API together with
//! the driving ports inbound adapters call and the driven ports persistence
//! adapters implement. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - User, UserRegistration, NewUser: user records and registration input.
//! - Person, PersonDraft: people records.
//! - UsersService, PeopleService: driving port implementations.

pub mod error;
pub mod password;
pub mod person;
pub mod ports;
pub mod trace_id;
pub mod user;

mod people_service;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::password::{Password, PasswordHash, PasswordHashError};
pub use self::people_service::PeopleService;
pub use self::person::{Person, PersonDraft, PersonId, PersonValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, User, UserId, UserRegistration, UserValidationError};
pub use self::users_service::UsersService;

/// Longest email or person name the `VARCHAR(120)` columns accept.
pub const MAX_FIELD_CHARS: usize = 120;
