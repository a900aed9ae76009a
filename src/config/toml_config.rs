use crate::core::ConfigProvider;
use crate::utils::error::{KimlikError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx";
pub const DEFAULT_SOAP_ACTION: &str = "http://tckimlik.nvi.gov.tr/WS/TCKimlikNoDogrula";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Where and how to reach the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_soap_action")]
    pub soap_action: String,
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_soap_action() -> String {
    DEFAULT_SOAP_ACTION.to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            soap_action: default_soap_action(),
            user_agent: None,
        }
    }
}

impl DirectoryConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl TomlConfig {
    /// Loads and parses a TOML file. Validation is a separate step.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KimlikError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KimlikError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KimlikError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for DirectoryConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn soap_action(&self) -> &str {
        &self.soap_action
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        validate_url("directory.endpoint", &self.endpoint)?;
        validate_non_empty_string("directory.soap_action", &self.soap_action)?;
        if let Some(agent) = &self.user_agent {
            validate_non_empty_string("directory.user_agent", agent)?;
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.directory.validate()
    }
}
