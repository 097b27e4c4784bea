use anyhow::Result;
use std::env;

/// Model selection, read from the environment on every request. Values are
/// passed through to the provider clients unvalidated; a bad value fails at
/// call time like any other downstream error.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_provider: String,
    pub model_name: String,
    pub embedding_model_name: String,
}

impl ModelConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            model_provider: env::var("MODEL_PROVIDER")
                .map_err(|_| anyhow::anyhow!("MODEL_PROVIDER environment variable not set"))?,
            model_name: env::var("MODEL_NAME")
                .map_err(|_| anyhow::anyhow!("MODEL_NAME environment variable not set"))?,
            embedding_model_name: env::var("EMBEDDING_MODEL_NAME")
                .map_err(|_| anyhow::anyhow!("EMBEDDING_MODEL_NAME environment variable not set"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_three_variables() {
        env::set_var("MODEL_PROVIDER", "openai");
        env::set_var("MODEL_NAME", "gpt-4o-mini");
        env::set_var("EMBEDDING_MODEL_NAME", "text-embedding-3-small");

        let config = ModelConfig::from_env().unwrap();
        assert_eq!(config.model_provider, "openai");
        assert_eq!(config.model_name, "gpt-4o-mini");
        assert_eq!(config.embedding_model_name, "text-embedding-3-small");
    }
}
