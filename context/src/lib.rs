//! # Fibre Context
//!
//! A thread-safe, type-erased context container for Rust.
//!
//! Fibre Context hands cross-cutting instances (configuration objects, shared
//! services, feature flags) between subsystems that should not know each
//! other's concrete types. Each instance lives under a string key and is
//! recovered by key and expected type, with the type re-checked on every read.
//!
//! ## Core Concepts
//!
//! - **ContextContainer**: one instance per key, stored by value, read back
//!   as a clone. Entries are never replaced or removed.
//! - **SharedContextContainer**: an `Arc` handle; build the container once at
//!   startup and pass it down to every collaborator that needs it.
//! - **Contract violations**: registering a key twice, asking `get_instance`
//!   for a key that is not there, or asking for the wrong type are bugs in
//!   the caller and panic. `find_instance` is the one way to probe for an
//!   optional dependency.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_context::ContextContainer;
//!
//! let container = ContextContainer::shared();
//! container.register_instance(42i32, "ConfigA");
//! container.register_instance(String::from("hello"), "ConfigB");
//!
//! // Any collaborator holding a clone of the handle can read them back.
//! let reader = container.clone();
//! assert_eq!(reader.get_instance::<i32>("ConfigA"), 42);
//! assert_eq!(reader.find_instance::<String>("ConfigB").as_deref(), Some("hello"));
//! assert_eq!(reader.find_instance::<String>("ConfigC"), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `type-tags`: keep the per-key type tags in release builds. Debug builds
//!   always record them. Lookups are type-checked either way; the tags add
//!   the registered type's name to violation messages.

mod container;
mod core;
mod error;
mod macros;

pub use container::{ContextContainer, SharedContextContainer};
pub use error::ContractViolation;
