//! Star Wars data backend library.
//!
//! Hexagonal layout: `domain` holds records, ports and services; `inbound`
//! adapts HTTP onto the driving ports; `outbound` implements the driven ports
//! over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Trace, cors};
