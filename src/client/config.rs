use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{expandenv, CommonConfig, PathSet};

/// How to reach the API server and who to act as. Loaded from `client.toml`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    /// API server url.
    #[serde(default = "ClientConfig::default_server")]
    pub server: String,

    /// Bearer token. Takes precedence over `token_path`.
    #[serde(default)]
    pub token: String,

    /// File holding the bearer token.
    #[serde(default)]
    pub token_path: String,

    /// PEM file with the CA that signed the server certificate. Defaults to
    /// `pki/ca.pem` under the config directory for https servers.
    #[serde(default)]
    pub cert_path: String,

    /// Skip server certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Namespace used for reviews unless overridden on the command line.
    #[serde(default = "ClientConfig::default_namespace")]
    pub namespace: String,

    #[serde(default = "ClientConfig::default_log_level")]
    pub log_level: String,
}

impl CommonConfig for ClientConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            token: String::new(),
            token_path: String::new(),
            cert_path: String::new(),
            insecure: false,
            namespace: Self::default_namespace(),
            log_level: Self::default_log_level(),
        }
    }

    fn complete(&mut self, ps: &PathSet) -> Result<()> {
        // The url itself is validated by Client::connect.
        self.server = expandenv("server", &self.server)?;
        if self.server.is_empty() {
            bail!("server cannot be empty");
        }

        if self.server.starts_with("https") {
            self.cert_path = expandenv("cert_path", &self.cert_path)?;
            if self.cert_path.is_empty() {
                let path = ps.pki_path.join("ca.pem");
                self.cert_path = format!("{}", path.display());
            }
        }

        self.token = expandenv("token", &self.token)?;
        self.token_path = expandenv("token_path", &self.token_path)?;

        self.namespace = expandenv("namespace", &self.namespace)?;
        if self.namespace.is_empty() {
            bail!("namespace cannot be empty");
        }

        match self.log_level.as_str() {
            "error" | "warn" | "info" | "debug" => {}
            _ => bail!("unknown log_level '{}'", self.log_level),
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn default_server() -> String {
        String::from("https://127.0.0.1:8443")
    }

    pub fn default_namespace() -> String {
        String::from("default")
    }

    pub fn default_log_level() -> String {
        String::from("error")
    }

    /// The inline token, or the content of `token_path`.
    pub fn read_token(&self) -> Result<Option<String>> {
        if !self.token.is_empty() {
            return Ok(Some(self.token.clone()));
        }
        if self.token_path.is_empty() {
            return Ok(None);
        }

        let token = std::fs::read_to_string(&self.token_path)
            .with_context(|| format!("read token file '{}'", self.token_path))?;
        let token = token.trim();
        if token.is_empty() {
            bail!("token file '{}' is empty", self.token_path);
        }
        Ok(Some(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_default() {
        let dir = tempfile::tempdir().unwrap();
        let ps = PathSet::new(Some(dir.path().to_path_buf())).unwrap();

        let cfg = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.server, "https://127.0.0.1:8443");
        assert_eq!(cfg.namespace, "default");
        assert_eq!(cfg.log_level, "error");
        assert_eq!(
            cfg.cert_path,
            format!("{}", dir.path().join("pki").join("ca.pem").display())
        );
        assert_eq!(cfg.read_token().unwrap(), None);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let token_path = dir.path().join("token");
        fs::write(&token_path, "secret-token\n").unwrap();
        fs::write(
            dir.path().join("client.toml"),
            format!(
                "server = \"http://127.0.0.1:8080\"\nnamespace = \"myproject\"\ntoken_path = \"{}\"\nlog_level = \"debug\"\n",
                token_path.display()
            ),
        )
        .unwrap();
        let ps = PathSet::new(Some(dir.path().to_path_buf())).unwrap();

        let cfg = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.server, "http://127.0.0.1:8080");
        assert_eq!(cfg.namespace, "myproject");
        assert!(cfg.cert_path.is_empty());
        assert_eq!(cfg.read_token().unwrap(), Some(String::from("secret-token")));
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("client.toml"), "log_level = \"trace\"\n").unwrap();
        let ps = PathSet::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(ps.load_config("client", ClientConfig::default).is_err());

        fs::write(dir.path().join("client.toml"), "namespace = \"\"\n").unwrap();
        assert!(ps.load_config("client", ClientConfig::default).is_err());

        fs::write(dir.path().join("client.toml"), "server = [1]\n").unwrap();
        assert!(ps.load_config("client", ClientConfig::default).is_err());
    }
}
