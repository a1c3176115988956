//! Centralized environment variable registry.
//!
//! Single source of truth for the environment variables ideagen reads,
//! printed by `ideagen env`.
//!
//! Configuration overrides use the `IDEAGEN_` prefix with `__` separator
//! for nested config paths (e.g., `IDEAGEN_API__PROVIDER`). API keys are
//! plain `IDEAGEN_*_API_KEY` variables and never live in config files.

/// An environment variable definition
#[derive(Debug, Clone)]
pub struct EnvVar {
    /// Environment variable name (e.g., "IDEAGEN_API__PROVIDER")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Category for grouping in output
    pub category: EnvVarCategory,
    /// Whether this variable is required for operation
    pub required: bool,
    /// Default value if not set
    pub default: Option<&'static str>,
    /// Example value for documentation
    pub example: Option<&'static str>,
    /// Hide the current value when printing
    pub secret: bool,
}

/// Categories for organizing environment variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvVarCategory {
    /// API keys
    Authentication,
    /// Text-generation service settings
    Api,
    /// Terminal UI settings
    Ui,
    /// Logging configuration
    Logging,
    /// File path configuration
    Paths,
}

impl EnvVarCategory {
    /// Display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            EnvVarCategory::Authentication => "Authentication",
            EnvVarCategory::Api => "API",
            EnvVarCategory::Ui => "UI",
            EnvVarCategory::Logging => "Logging",
            EnvVarCategory::Paths => "Paths",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [EnvVarCategory] {
        &[
            EnvVarCategory::Authentication,
            EnvVarCategory::Api,
            EnvVarCategory::Ui,
            EnvVarCategory::Logging,
            EnvVarCategory::Paths,
        ]
    }
}

/// Static registry of all documented environment variables
pub static ENV_VARS: &[EnvVar] = &[
    // === Authentication ===
    EnvVar {
        name: "IDEAGEN_GEMINI_API_KEY",
        description: "Gemini API key, required when the provider is gemini",
        category: EnvVarCategory::Authentication,
        required: true,
        default: None,
        example: Some("AIza..."),
        secret: true,
    },
    EnvVar {
        name: "IDEAGEN_ANTHROPIC_API_KEY",
        description: "Anthropic API key, required when the provider is anthropic",
        category: EnvVarCategory::Authentication,
        required: false,
        default: None,
        example: Some("sk-ant-api03-..."),
        secret: true,
    },
    // === API ===
    EnvVar {
        name: "IDEAGEN_API__PROVIDER",
        description: "Text-generation provider (gemini or anthropic)",
        category: EnvVarCategory::Api,
        required: false,
        default: Some("gemini"),
        example: Some("anthropic"),
        secret: false,
    },
    EnvVar {
        name: "IDEAGEN_API__MODEL",
        description: "Model name; defaults per provider",
        category: EnvVarCategory::Api,
        required: false,
        default: None,
        example: Some("gemini-1.5-pro"),
        secret: false,
    },
    EnvVar {
        name: "IDEAGEN_API__BASE_URL",
        description: "Override the provider endpoint root",
        category: EnvVarCategory::Api,
        required: false,
        default: None,
        example: Some("http://localhost:8080"),
        secret: false,
    },
    EnvVar {
        name: "IDEAGEN_API__TIMEOUT_SECS",
        description: "Request timeout in seconds",
        category: EnvVarCategory::Api,
        required: false,
        default: Some("60"),
        example: Some("120"),
        secret: false,
    },
    EnvVar {
        name: "IDEAGEN_API__MAX_TOKENS",
        description: "Reply token cap (anthropic only)",
        category: EnvVarCategory::Api,
        required: false,
        default: Some("1024"),
        example: Some("2048"),
        secret: false,
    },
    // === UI ===
    EnvVar {
        name: "IDEAGEN_UI__TICK_RATE_MS",
        description: "Terminal event poll interval in milliseconds",
        category: EnvVarCategory::Ui,
        required: false,
        default: Some("100"),
        example: Some("250"),
        secret: false,
    },
    // === Logging ===
    EnvVar {
        name: "IDEAGEN_LOGGING__LEVEL",
        description: "Log level filter (trace, debug, info, warn, error)",
        category: EnvVarCategory::Logging,
        required: false,
        default: Some("info"),
        example: Some("debug"),
        secret: false,
    },
    EnvVar {
        name: "IDEAGEN_LOGGING__TO_FILE",
        description: "Write logs to a file while the wizard is running",
        category: EnvVarCategory::Logging,
        required: false,
        default: Some("true"),
        example: Some("false"),
        secret: false,
    },
    EnvVar {
        name: "RUST_LOG",
        description: "Full tracing filter directive; overrides the configured level",
        category: EnvVarCategory::Logging,
        required: false,
        default: None,
        example: Some("ideagen=trace"),
        secret: false,
    },
    // === Paths ===
    EnvVar {
        name: "IDEAGEN_PATHS__STATE",
        description: "Directory for logs and runtime state",
        category: EnvVarCategory::Paths,
        required: false,
        default: Some("<data-local-dir>/ideagen"),
        example: Some("/tmp/ideagen"),
        secret: false,
    },
];

/// Get all environment variables for a given category
pub fn env_vars_for_category(category: EnvVarCategory) -> impl Iterator<Item = &'static EnvVar> {
    ENV_VARS.iter().filter(move |v| v.category == category)
}

/// Get environment variables grouped by category
pub fn env_vars_by_category() -> Vec<(EnvVarCategory, Vec<&'static EnvVar>)> {
    EnvVarCategory::all()
        .iter()
        .map(|cat| {
            let vars: Vec<&EnvVar> = env_vars_for_category(*cat).collect();
            (*cat, vars)
        })
        .filter(|(_, vars)| !vars.is_empty())
        .collect()
}

/// Current value of a variable as it should be shown to the user
pub fn display_value(var: &EnvVar, value: Option<&str>) -> String {
    match value {
        None => "(unset)".to_string(),
        Some(v) if v.is_empty() => "(empty)".to_string(),
        Some(_) if var.secret => "(set)".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Render the registry with values from `lookup`
pub fn render_report(lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::new();
    for (category, vars) in env_vars_by_category() {
        out.push_str(&format!("{}\n", category.display_name()));
        for var in vars {
            let value = lookup(var.name);
            out.push_str(&format!(
                "  {:<28} {}\n      {}",
                var.name,
                display_value(var, value.as_deref()),
                var.description
            ));
            if let Some(default) = var.default {
                out.push_str(&format!(" [default: {default}]"));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
