use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_show_offsets")]
    pub show_offsets: bool,
}

fn default_prompt() -> String {
    String::from("slex> ")
}

fn default_show_offsets() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: default_prompt(),
            show_offsets: default_show_offsets(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        let mut config = if config_path.exists() {
            fs::read_to_string(&config_path)
                .ok()
                .and_then(|contents| serde_json::from_str(&contents).ok())
                .unwrap_or_default()
        } else {
            let config = Config::default();
            config.save().unwrap_or_default();
            config
        };
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(prompt) = env::var("SLEX_PROMPT") {
            self.prompt = prompt;
        }
        if let Ok(value) = env::var("SLEX_SHOW_OFFSETS") {
            self.show_offsets = value == "true";
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE").unwrap_or_else(|_| String::from("."))
        } else {
            env::var("HOME").unwrap_or_else(|_| String::from("."))
        };
        PathBuf::from(home).join(".slex").join("config.json")
    }
}
