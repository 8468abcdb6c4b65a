use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend deployments the dashboard can connect to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// A custom backend reachable at the given base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:8000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "local" => Ok(Environment::Local),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_base_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn test_parse_custom_url_strips_trailing_slash() {
        let env = "http://10.0.0.5:8000/".parse::<Environment>().unwrap();
        assert_eq!(env.api_base_url(), "http://10.0.0.5:8000");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("ftp://nope".parse::<Environment>().is_err());
        assert!("not-a-url".parse::<Environment>().is_err());
    }
}
