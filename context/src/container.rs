//! The `ContextContainer` struct and its associated methods.

use crate::core::Registry;
use crate::error::ContractViolation;
use parking_lot::RwLock;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// The handle through which one container is shared by many owners.
///
/// The container and every instance it holds are dropped when the last
/// handle is released.
pub type SharedContextContainer = Arc<ContextContainer>;

/// A thread-safe, type-erased dependency-injection container.
///
/// Holds at most one instance per string key. Instances are stored by value
/// and handed back as clones, with the requested type re-checked against the
/// registered one on every read. Misuse (a duplicate key, a missing key on
/// [`get_instance`](Self::get_instance), or a wrong type) is a programmer
/// defect and panics with a [`ContractViolation`] message.
///
/// All operations take `&self`; one reader-writer lock guards the state.
/// The `Clone` impl of a stored type runs under that lock and must not call
/// back into the same container.
#[derive(Default)]
pub struct ContextContainer {
  registry: RwLock<Registry>,
}

impl ContextContainer {
  /// Creates a new, empty `ContextContainer`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty container behind a shared handle.
  pub fn shared() -> SharedContextContainer {
    Arc::new(Self::new())
  }

  // --- Registration ---

  /// Registers `instance` under `key`.
  ///
  /// By convention the key is the plain name of the interface being stored,
  /// so an `Arc<dyn ReactNativeConfig>` goes under `"ReactNativeConfig"` even
  /// when the concrete value is some more specific implementation.
  ///
  /// # Panics
  ///
  /// Panics if an instance is already registered under `key`.
  #[track_caller]
  pub fn register_instance<T: Clone + Any + Send + Sync>(&self, instance: T, key: &str) {
    self.registry.write().insert(key, instance);
    tracing::debug!(key, type_name = type_name::<T>(), "registered context instance");
  }

  // --- Resolution ---

  /// Returns a clone of the instance registered under `key`.
  ///
  /// # Panics
  ///
  /// Panics if nothing is registered under `key`, or if it was registered
  /// with a type other than `T`. Use [`find_instance`](Self::find_instance)
  /// for dependencies that may legitimately be absent.
  #[track_caller]
  pub fn get_instance<T: Clone + Any + Send + Sync>(&self, key: &str) -> T {
    let registry = self.registry.read();
    match registry.lookup::<T>(key) {
      Some(instance) => instance.clone(),
      None => ContractViolation::MissingKey {
        key: key.to_owned(),
        requested: type_name::<T>(),
      }
      .raise(),
    }
  }

  /// Returns a clone of the instance registered under `key`, or `None` if
  /// the key was never registered.
  ///
  /// # Panics
  ///
  /// Panics if `key` was registered with a type other than `T`.
  #[track_caller]
  pub fn find_instance<T: Clone + Any + Send + Sync>(&self, key: &str) -> Option<T> {
    self.registry.read().lookup::<T>(key).cloned()
  }

  // --- Introspection ---

  /// Returns `true` if an instance is registered under `key`, whatever its type.
  pub fn contains_key(&self, key: &str) -> bool {
    self.registry.read().contains_key(key)
  }

  /// Returns the number of registered instances.
  pub fn len(&self) -> usize {
    self.registry.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl fmt::Debug for ContextContainer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let registry = self.registry.read();
    let mut map = f.debug_map();
    for (key, type_name) in registry.entries() {
      map.entry(&key, &format_args!("{}", type_name));
    }
    map.finish()
  }
}
