//! Public macros for the key naming convention.

/// Expands to the conventional registration key for an interface: the name
/// of the last path segment, as a `&'static str`.
///
/// # Examples
///
/// ```
/// use fibre_context::{instance_key, ContextContainer};
/// use std::sync::Arc;
///
/// mod config {
///   pub trait ReactNativeConfig: Send + Sync {
///     fn get_bool(&self, param: &str) -> bool;
///   }
/// }
///
/// struct EmptyReactNativeConfig;
/// impl config::ReactNativeConfig for EmptyReactNativeConfig {
///   fn get_bool(&self, _param: &str) -> bool {
///     false
///   }
/// }
///
/// assert_eq!(instance_key!(config::ReactNativeConfig), "ReactNativeConfig");
///
/// let container = ContextContainer::new();
/// let instance: Arc<dyn config::ReactNativeConfig> = Arc::new(EmptyReactNativeConfig);
/// container.register_instance(instance, instance_key!(config::ReactNativeConfig));
///
/// let found = container
///   .get_instance::<Arc<dyn config::ReactNativeConfig>>(instance_key!(ReactNativeConfig));
/// assert!(!found.get_bool("enable_feature"));
/// ```
#[macro_export]
macro_rules! instance_key {
    ($name:ident) => {
        stringify!($name)
    };

    // Walk down a path and keep only its final segment.
    ($head:ident :: $($rest:ident)::+) => {
        $crate::instance_key!($($rest)::+)
    };
}
