//! Package manager detection from the invoking environment

use std::fmt;

/// Environment variable package managers set when running a create script
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Manager assumed when nothing is detected
const DEFAULT_MANAGER: &str = "npm";

/// The package manager that launched the scaffolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub name: String,
    pub version: Option<String>,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self {
            name: DEFAULT_MANAGER.to_string(),
            version: None,
        }
    }
}

impl PackageManager {
    /// Parse a user agent such as `pnpm/8.15.0 npm/? node/v20.11.0 linux x64`
    ///
    /// Only the first `name/version` token is considered.
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        let token = user_agent.split_whitespace().next()?;
        let mut parts = token.split('/');
        let name = parts.next().filter(|n| !n.is_empty())?;
        let version = parts.next().filter(|v| !v.is_empty()).map(str::to_string);

        Some(Self {
            name: name.to_string(),
            version,
        })
    }

    /// Detect from the environment, falling back to npm
    pub fn detect() -> Self {
        std::env::var(USER_AGENT_ENV)
            .ok()
            .and_then(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default()
    }

    /// Commands that install dependencies and start the dev server
    pub fn dev_commands(&self) -> Vec<String> {
        match self.name.as_str() {
            "yarn" => vec!["yarn".to_string(), "yarn dev".to_string()],
            name => vec![format!("{} install", name), format!("{} run dev", name)],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
