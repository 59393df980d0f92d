use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_FALLBACK: &str = "Desculpe, não entendi a pergunta.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResponderConfig {
    /// Baseline an entry's score must strictly exceed to be chosen.
    pub threshold: f64,
    pub fallback: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ResponderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub prompt: String,
    pub bot_label: String,
    pub exit_word: String,
    pub farewell: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt: "You: ".to_string(),
            bot_label: "Bot: ".to_string(),
            exit_word: "sair".to_string(),
            farewell: "bye, bye!".to_string(),
        }
    }
}

/// Knowledge base picked up when no path is given on the command line.
pub fn default_knowledge_base_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?
        .join("bestmatch-chatbot")
        .join("knowledge_base.json");
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResponderConfig::default();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.fallback, "Desculpe, não entendi a pergunta.");
        assert!(config.validate().is_ok());
        assert_eq!(ChatConfig::default().exit_word, "sair");
    }

    #[test]
    fn test_threshold_bounds() {
        for threshold in [0.0, 1.0, 0.85] {
            let config = ResponderConfig {
                threshold,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
        for threshold in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = ResponderConfig {
                threshold,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidThreshold(_))
            ));
        }
    }
}
