use eyre::{Result, WrapErr, eyre};
use secrecy::SecretString;
use std::env;
use url::Url;

#[derive(Clone)]
pub struct Config {
    pub auth_url: Url,
    pub auth_api_key: SecretString,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(name).ok_or_else(|| eyre!("missing environment variable: {}", name))
        };

        let auth_url = var("COSMOS_AUTH_URL")?;
        Ok(Self {
            auth_url: Url::parse(&auth_url)
                .wrap_err_with(|| format!("invalid COSMOS_AUTH_URL: {auth_url}"))?,
            auth_api_key: var("COSMOS_AUTH_API_KEY")?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("COSMOS_AUTH_URL", "https://auth.example.com"),
            ("COSMOS_AUTH_API_KEY", "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.auth_url.as_str(), "https://auth.example.com/");
        assert_eq!(config.auth_api_key.expose_secret(), "anon-key");
    }

    #[test]
    fn missing_variable_is_named() {
        let error =
            Config::from_lookup(lookup(&[("COSMOS_AUTH_URL", "https://auth.example.com")]))
                .err()
                .unwrap();

        assert!(error.to_string().contains("COSMOS_AUTH_API_KEY"));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let error = Config::from_lookup(lookup(&[
            ("COSMOS_AUTH_URL", "not a url"),
            ("COSMOS_AUTH_API_KEY", "anon-key"),
        ]))
        .err()
        .unwrap();

        assert!(error.to_string().contains("invalid COSMOS_AUTH_URL"));
    }
}
