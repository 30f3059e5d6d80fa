use fibre_context::{instance_key, ContextContainer, SharedContextContainer};
use pretty_assertions::assert_eq;
use std::sync::Arc;

// --- Test Fixtures ---

trait ReactNativeConfig: Send + Sync {
  fn get_string(&self, param: &str) -> String;
}

struct EmptyReactNativeConfig;
impl ReactNativeConfig for EmptyReactNativeConfig {
  fn get_string(&self, _param: &str) -> String {
    String::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScreenMetrics {
  width: u32,
  height: u32,
  scale: u8,
}

// --- Basic Tests ---

#[test]
fn test_register_then_get_round_trip() {
  // Arrange
  let container = ContextContainer::new();
  let metrics = ScreenMetrics {
    width: 1080,
    height: 1920,
    scale: 3,
  };
  container.register_instance(metrics.clone(), "ScreenMetrics");

  // Act
  let resolved = container.get_instance::<ScreenMetrics>("ScreenMetrics");

  // Assert
  assert_eq!(resolved, metrics);
}

#[test]
fn test_config_scenario() {
  let container = ContextContainer::new();
  container.register_instance(42i32, "ConfigA");
  container.register_instance(String::from("hello"), "ConfigB");

  assert_eq!(container.get_instance::<i32>("ConfigA"), 42);
  assert_eq!(container.get_instance::<String>("ConfigB"), "hello");
  assert_eq!(container.find_instance::<String>("ConfigC"), None);
}

#[test]
fn test_find_instance_on_empty_container_is_none_for_any_type() {
  let container = ContextContainer::new();

  assert_eq!(container.find_instance::<i32>("missing"), None);
  assert_eq!(container.find_instance::<String>("missing"), None);
  assert_eq!(container.find_instance::<Vec<u8>>(""), None);
  assert!(container.is_empty());
}

#[test]
fn test_find_instance_after_registration() {
  let container = ContextContainer::new();
  container.register_instance(vec![1u8, 2, 3], "Payload");

  assert_eq!(container.find_instance::<Vec<u8>>("Payload"), Some(vec![1, 2, 3]));
}

#[test]
fn test_registered_value_is_a_snapshot() {
  // Arrange
  let mut original = ScreenMetrics {
    width: 640,
    height: 480,
    scale: 1,
  };
  let container = ContextContainer::new();
  container.register_instance(original.clone(), "ScreenMetrics");

  // Act: mutate the caller's copy after registration.
  original.width = 4096;

  // Assert
  assert_eq!(container.get_instance::<ScreenMetrics>("ScreenMetrics").width, 640);
}

#[test]
fn test_returned_values_are_independent_copies() {
  let container = ContextContainer::new();
  container.register_instance(vec![String::from("a")], "Tags");

  let mut first = container.get_instance::<Vec<String>>("Tags");
  first.push(String::from("b"));

  assert_eq!(container.get_instance::<Vec<String>>("Tags"), vec![String::from("a")]);
}

#[test]
fn test_trait_object_stored_under_interface_name() {
  // Arrange
  let container = ContextContainer::new();
  let config: Arc<dyn ReactNativeConfig> = Arc::new(EmptyReactNativeConfig);
  container.register_instance(config.clone(), instance_key!(ReactNativeConfig));

  // Act
  let resolved = container.get_instance::<Arc<dyn ReactNativeConfig>>("ReactNativeConfig");

  // Assert: shared handles point at the same instance.
  assert!(Arc::ptr_eq(&config, &resolved));
  assert_eq!(resolved.get_string("anything"), "");
}

#[test]
fn test_instance_key_keeps_last_path_segment() {
  assert_eq!(instance_key!(ReactNativeConfig), "ReactNativeConfig");
  assert_eq!(instance_key!(std::sync::Arc), "Arc");
  assert_eq!(instance_key!(a::b::c::Leaf), "Leaf");
}

#[test]
fn test_same_value_type_under_different_keys() {
  let container = ContextContainer::new();
  container.register_instance(1u64, "First");
  container.register_instance(2u64, "Second");

  assert_eq!(container.get_instance::<u64>("First"), 1);
  assert_eq!(container.get_instance::<u64>("Second"), 2);
  assert_eq!(container.len(), 2);
}

#[test]
fn test_contains_key_ignores_type() {
  let container = ContextContainer::new();
  container.register_instance(0.5f32, "Opacity");

  assert!(container.contains_key("Opacity"));
  assert!(!container.contains_key("opacity"));
}

#[test]
fn test_shared_handle_sees_registrations_from_any_owner() {
  // Arrange
  let container: SharedContextContainer = ContextContainer::shared();
  let producer = Arc::clone(&container);
  let consumer = Arc::clone(&container);

  // Act
  producer.register_instance(String::from("production"), "Environment");

  // Assert
  assert_eq!(consumer.get_instance::<String>("Environment"), "production");
  assert_eq!(Arc::strong_count(&container), 3);
}

#[test]
fn test_last_owner_drop_releases_instances() {
  // The container holds one clone of `marker`; dropping it must release that clone.
  let marker = Arc::new(());
  let container = ContextContainer::shared();
  container.register_instance(Arc::clone(&marker), "Marker");

  let other_owner = Arc::clone(&container);
  drop(container);
  assert_eq!(Arc::strong_count(&marker), 2);

  drop(other_owner);
  assert_eq!(Arc::strong_count(&marker), 1);
}

#[cfg(debug_assertions)]
#[test]
fn test_debug_lists_keys_and_types() {
  let container = ContextContainer::new();
  container.register_instance(7u8, "B");
  container.register_instance(String::from("x"), "A");

  assert_eq!(
    format!("{:?}", container),
    r#"{"A": alloc::string::String, "B": u8}"#
  );
}
