//! Tracer identity and the configuration variants a tracer expands into.

use serde_json::{Map, Value};

/// Tracers whose output shape bifurcates on the `diffMode` config flag.
/// Each of these gets one fixture tree per mode instead of a single run.
const DIFF_MODE_TRACERS: &[&str] = &["prestateTracer"];

/// A named debug tracer, as the node knows it (`4byteTracer`,
/// `callTracer`, `prestateTracer`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracer {
    name: String,
    slug: String,
}

impl Tracer {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = format!("{}-tracer", name.replace("Tracer", "").to_lowercase());
        Self { name, slug }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory-friendly form of the tracer name: `prestateTracer`
    /// becomes `prestate-tracer`.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The configuration variants to generate, in a fixed order.
    ///
    /// Most tracers run once with their default behavior; diffMode tracers
    /// expand to one labeled variant per mode. Downstream the variant list
    /// is uniform — the generator has no per-tracer conditionals.
    pub fn variants(&self) -> Vec<Variant> {
        if DIFF_MODE_TRACERS.contains(&self.name.as_str()) {
            vec![Variant::diff_mode(false), Variant::diff_mode(true)]
        } else {
            vec![Variant::default()]
        }
    }
}

/// One point on a tracer's configuration axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    /// Subdirectory the variant's fixtures are written under. `None`
    /// keeps them directly at the tracer root.
    pub label: Option<String>,
    /// The `tracerConfig` object sent with every request, if any.
    pub config: Option<Map<String, Value>>,
}

impl Variant {
    pub fn new(label: Option<String>, config: Option<Map<String, Value>>) -> Self {
        Self { label, config }
    }

    pub fn diff_mode(enabled: bool) -> Self {
        let mut config = Map::new();
        config.insert("diffMode".to_string(), Value::Bool(enabled));
        Self {
            label: Some(format!("diff-mode-{enabled}")),
            config: Some(config),
        }
    }
}
