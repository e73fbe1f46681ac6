// Configuration type definitions

use serde::Deserialize;

use super::completion_types::CompletionConfig;

/// Source language of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Verilog,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::Verilog => "verilog",
        }
    }
}

fn default_tab_width() -> u8 {
    4
}

/// Editor configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_tab_width")]
    pub tab_width: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            language: Language::default(),
            tab_width: default_tab_width(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}
