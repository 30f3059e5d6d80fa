use fibre_context::{instance_key, ContextContainer, SharedContextContainer};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

// --- Interfaces shared between subsystems ---

trait ReactNativeConfig: Send + Sync {
  fn get_bool(&self, param: &str) -> bool;
}

struct StaticReactNativeConfig {
  enabled: Vec<&'static str>,
}

impl ReactNativeConfig for StaticReactNativeConfig {
  fn get_bool(&self, param: &str) -> bool {
    self.enabled.iter().any(|enabled| *enabled == param)
  }
}

#[derive(Clone, Debug)]
struct SurfaceSettings {
  font_scale: f32,
}

// A subsystem that only knows the interface and the key convention.
fn render_surface(context: SharedContextContainer, surface_id: u32) -> String {
  let config = context.get_instance::<Arc<dyn ReactNativeConfig>>(instance_key!(ReactNativeConfig));
  let settings = context
    .find_instance::<SurfaceSettings>(instance_key!(SurfaceSettings))
    .unwrap_or(SurfaceSettings { font_scale: 1.0 });

  format!(
    "surface {} (fabric: {}, font scale: {})",
    surface_id,
    config.get_bool("enable_fabric"),
    settings.font_scale
  )
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .init();

  // --- Startup: build the container once and register the shared instances ---
  let context = ContextContainer::shared();
  let config: Arc<dyn ReactNativeConfig> = Arc::new(StaticReactNativeConfig {
    enabled: vec!["enable_fabric"],
  });
  context.register_instance(config, instance_key!(ReactNativeConfig));
  context.register_instance(SurfaceSettings { font_scale: 1.25 }, instance_key!(SurfaceSettings));
  println!("Registered: {:?}", context);

  // --- Hand the same container to independent workers ---
  let workers: Vec<_> = (1..=3)
    .map(|surface_id| {
      let context = Arc::clone(&context);
      thread::spawn(move || render_surface(context, surface_id))
    })
    .collect();

  for worker in workers {
    println!("{}", worker.join().expect("worker thread panicked"));
  }
}
