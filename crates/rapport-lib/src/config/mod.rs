use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::RapportError;

/// When to decorate reported messages with terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal that can render ANSI.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(RapportError::InvalidColorChoice(s.to_string())),
        }
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

/// Console settings initialized once from environment variables.
///
/// Access via `ConsoleConfig::get()` which returns a `&'static ConsoleConfig`.
/// Precedence: `RAPPORT_COLOR`, then `NO_COLOR`, then `CLICOLOR_FORCE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub color: ColorChoice,
}

static CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();

impl ConsoleConfig {
    /// Returns a reference to the global `ConsoleConfig` singleton.
    /// Initializes from environment variables on first call.
    pub fn get() -> &'static ConsoleConfig {
        CONFIG.get_or_init(ConsoleConfig::from_env)
    }

    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("RAPPORT_COLOR") {
            match raw.parse::<ColorChoice>() {
                Ok(color) => return Self { color },
                Err(e) => tracing::warn!("Ignoring RAPPORT_COLOR: {}", e),
            }
        }

        let color = if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            ColorChoice::Never
        } else if lookup("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
            ColorChoice::Always
        } else {
            ColorChoice::Auto
        };

        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConsoleConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(config_from(&[]).color, ColorChoice::Auto);
    }

    #[test]
    fn test_no_color_disables() {
        assert_eq!(config_from(&[("NO_COLOR", "1")]).color, ColorChoice::Never);
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        assert_eq!(config_from(&[("NO_COLOR", "")]).color, ColorChoice::Auto);
    }

    #[test]
    fn test_clicolor_force() {
        assert_eq!(
            config_from(&[("CLICOLOR_FORCE", "1")]).color,
            ColorChoice::Always
        );
        assert_eq!(
            config_from(&[("CLICOLOR_FORCE", "0")]).color,
            ColorChoice::Auto
        );
    }

    #[test]
    fn test_no_color_beats_clicolor_force() {
        let config = config_from(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_rapport_color_wins() {
        let config = config_from(&[("RAPPORT_COLOR", "always"), ("NO_COLOR", "1")]);
        assert_eq!(config.color, ColorChoice::Always);
    }

    #[test]
    fn test_invalid_rapport_color_falls_through() {
        let config = config_from(&[("RAPPORT_COLOR", "rainbow"), ("NO_COLOR", "1")]);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!(" Always ".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("NEVER".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!(matches!(
            "sometimes".parse::<ColorChoice>(),
            Err(RapportError::InvalidColorChoice(_))
        ));
    }

    #[test]
    fn test_color_choice_display_round_trips() {
        for choice in [ColorChoice::Auto, ColorChoice::Always, ColorChoice::Never] {
            assert_eq!(choice.to_string().parse::<ColorChoice>().unwrap(), choice);
        }
    }
}
