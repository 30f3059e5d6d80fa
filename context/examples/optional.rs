use fibre_context::ContextContainer;
use std::panic::{self, AssertUnwindSafe};

fn main() {
  let context = ContextContainer::new();
  context.register_instance(String::from("https://example.invalid/metro"), "BundleUrl");

  // --- Probing an optional dependency with `find_instance` ---
  match context.find_instance::<u16>("InspectorPort") {
    Some(port) => println!("Inspector listening on {}", port),
    None => println!("No inspector configured; continuing without it."),
  }

  // --- Required dependencies use `get_instance` and fail fast ---
  println!("Bundle: {}", context.get_instance::<String>("BundleUrl"));

  let result = panic::catch_unwind(AssertUnwindSafe(|| {
    // Wrong type for a registered key is a wiring bug.
    let _ = context.get_instance::<u16>("BundleUrl");
  }));
  assert!(result.is_err(), "type mismatch should have panicked");
  println!("Caught the expected panic for a mistyped lookup.");
}
