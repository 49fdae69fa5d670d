use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, `RUST_LOG` still takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of the human format
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}
