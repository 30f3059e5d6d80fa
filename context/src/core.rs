//! Core, non-public data structures for the context container.

use crate::error::ContractViolation;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Placeholder used in violation messages when no type tag was recorded.
const UNTRACKED_TYPE: &str = "<untracked type>";

/// The identity of the type a key was registered with.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeTag {
  pub(crate) id: TypeId,
  pub(crate) name: &'static str,
}

impl TypeTag {
  #[cfg(any(debug_assertions, feature = "type-tags", test))]
  pub(crate) fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  #[cfg(any(debug_assertions, feature = "type-tags", test))]
  pub(crate) fn is<T: ?Sized + Any>(&self) -> bool {
    self.id == TypeId::of::<T>()
  }
}

impl fmt::Debug for TypeTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// An owned, type-erased instance.
pub(crate) struct Instance {
  value: Box<dyn Any + Send + Sync>,
}

impl Instance {
  pub(crate) fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self {
      value: Box::new(value),
    }
  }

  pub(crate) fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.value.downcast_ref::<T>()
  }
}

/// The state guarded by the container's lock.
///
/// Every key in `instances` has a matching entry in `type_tags` whenever tags
/// are compiled in; both are written in the same critical section.
#[derive(Default)]
pub(crate) struct Registry {
  instances: HashMap<String, Instance>,
  #[cfg(any(debug_assertions, feature = "type-tags"))]
  type_tags: HashMap<String, TypeTag>,
}

impl Registry {
  /// Inserts `value` under `key`. Panics if `key` is taken.
  #[track_caller]
  pub(crate) fn insert<T: Any + Send + Sync>(&mut self, key: &str, value: T) {
    if self.instances.contains_key(key) {
      ContractViolation::DuplicateKey {
        key: key.to_owned(),
        registered: self.registered_name(key),
      }
      .raise();
    }

    self.instances.insert(key.to_owned(), Instance::new(value));
    self.record_tag::<T>(key);
  }

  /// Returns the instance under `key`, or `None` if the key was never
  /// registered. Panics if it was registered with a type other than `T`.
  #[track_caller]
  pub(crate) fn lookup<T: Any>(&self, key: &str) -> Option<&T> {
    let instance = self.instances.get(key)?;
    self.check_tag::<T>(key);

    match instance.downcast_ref::<T>() {
      Some(value) => Some(value),
      None => self.mismatch::<T>(key),
    }
  }

  pub(crate) fn contains_key(&self, key: &str) -> bool {
    self.instances.contains_key(key)
  }

  pub(crate) fn len(&self) -> usize {
    self.instances.len()
  }

  /// Registered keys in sorted order, paired with their type name.
  pub(crate) fn entries(&self) -> Vec<(&str, &'static str)> {
    let mut entries: Vec<_> = self
      .instances
      .keys()
      .map(|key| (key.as_str(), self.tag(key).map_or(UNTRACKED_TYPE, |tag| tag.name)))
      .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
  }

  #[cold]
  #[track_caller]
  fn mismatch<T: Any>(&self, key: &str) -> ! {
    ContractViolation::TypeMismatch {
      key: key.to_owned(),
      registered: self.registered_name(key),
      requested: type_name::<T>(),
    }
    .raise()
  }

  fn registered_name(&self, key: &str) -> String {
    self
      .tag(key)
      .map_or(UNTRACKED_TYPE, |tag| tag.name)
      .to_owned()
  }

  #[cfg(any(debug_assertions, feature = "type-tags"))]
  fn record_tag<T: Any>(&mut self, key: &str) {
    self.type_tags.insert(key.to_owned(), TypeTag::of::<T>());
  }

  #[cfg(not(any(debug_assertions, feature = "type-tags")))]
  fn record_tag<T: Any>(&mut self, _key: &str) {}

  #[cfg(any(debug_assertions, feature = "type-tags"))]
  #[track_caller]
  fn check_tag<T: Any>(&self, key: &str) {
    match self.type_tags.get(key) {
      Some(tag) if tag.is::<T>() => {}
      _ => self.mismatch::<T>(key),
    }
  }

  // The checked downcast in `lookup` still rejects a wrong `T`.
  #[cfg(not(any(debug_assertions, feature = "type-tags")))]
  fn check_tag<T: Any>(&self, _key: &str) {}

  #[cfg(any(debug_assertions, feature = "type-tags"))]
  fn tag(&self, key: &str) -> Option<TypeTag> {
    self.type_tags.get(key).copied()
  }

  #[cfg(not(any(debug_assertions, feature = "type-tags")))]
  fn tag(&self, _key: &str) -> Option<TypeTag> {
    None
  }
}
