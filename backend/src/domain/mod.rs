//! Domain primitives, ports and services.
//!
//! Purpose: define the recipe entity and the operations on it without any
//! knowledge of HTTP or SQL. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Recipe / RecipeContent / RecipeFilter — the entity, its mutable fields
//!   and the search predicate.
//! - RecipeId — server-generated identifier.
//! - RecipeService — implementation of the recipe driving ports.
//! - TraceId — per-request correlation identifier.

pub mod error;
pub mod ports;
pub mod recipe;
pub mod recipe_id;
pub mod recipe_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recipe::{Recipe, RecipeContent, RecipeFilter};
pub use self::recipe_id::{RecipeId, RecipeIdValidationError};
pub use self::recipe_service::RecipeService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

