//! Model value object representing a provider model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat-completion models known to work with the JSON object response mode
/// (Value Object)
///
/// Anything else can still be addressed through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama31_8bInstant,
    Llama33_70bVersatile,
    Gemma2_9b,
    Gpt4oMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the provider
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama-3.1-8b-instant)
    fn default() -> Self {
        Model::Llama31_8bInstant
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "gemma2-9b-it" => Model::Gemma2_9b,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible
        Ok(s.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(Model::default().as_str(), "llama-3.1-8b-instant");
    }

    #[test]
    fn test_parse_known_and_custom() {
        let known: Model = "llama-3.3-70b-versatile".parse().unwrap();
        assert_eq!(known, Model::Llama33_70bVersatile);

        let custom: Model = "mixtral-8x7b".parse().unwrap();
        assert_eq!(custom, Model::Custom("mixtral-8x7b".to_string()));
        assert_eq!(custom.to_string(), "mixtral-8x7b");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Gpt4oMini).unwrap();
        assert_eq!(json, "\"gpt-4o-mini\"");
        let back: Model = serde_json::from_str("\"llama-3.1-8b-instant\"").unwrap();
        assert_eq!(back, Model::Llama31_8bInstant);
    }
}
