//! Configuration schema definitions.
//!
//! This module defines the route file structure.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration: generator settings plus the routes to register.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// URL generator settings.
    pub generator: GeneratorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, registered in file order.
    pub routes: Vec<RouteConfig>,
}

/// URL generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Check values against placeholder patterns before rendering.
    pub validate: bool,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route name used for generation. Anonymous routes get `__route__<n>`.
    #[serde(default)]
    pub name: Option<String>,

    /// HTTP methods the route is registered for.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Route template, e.g. `/articles/{id:\d+}[/{title}]`.
    pub pattern: String,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
