//! Default year labels the range validator resets to.

use serde::{Deserialize, Serialize};

fn default_start() -> String {
    String::from("3000 BCE")
}

fn default_end() -> String {
    String::from("2024 CE")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YearsConfig {
    #[serde(default = "default_start")]
    pub default_start: String,

    #[serde(default = "default_end")]
    pub default_end: String,
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            default_start: default_start(),
            default_end: default_end(),
        }
    }
}
