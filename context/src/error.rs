//! Contract violations raised by the container.

use thiserror::Error;

/// A misuse of the [`ContextContainer`](crate::ContextContainer) API.
///
/// These are programmer defects, not runtime conditions. The container never
/// returns this type; it panics with its `Display` text. It is public so that
/// tests and callers can match on the expected panic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
  #[error("ContextContainer already had instance for key '{key}' (registered as {registered})")]
  DuplicateKey { key: String, registered: String },

  #[error("ContextContainer doesn't have an instance for key '{key}' (requested as {requested})")]
  MissingKey { key: String, requested: &'static str },

  #[error(
    "ContextContainer stores an instance of different type for key '{key}': registered as {registered}, requested as {requested}"
  )]
  TypeMismatch {
    key: String,
    registered: String,
    requested: &'static str,
  },
}

impl ContractViolation {
  /// Records the violation and aborts the current operation.
  #[cold]
  #[track_caller]
  pub(crate) fn raise(self) -> ! {
    tracing::error!(violation = %self, "context container contract violated");
    panic!("{}", self)
  }
}
