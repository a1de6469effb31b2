use anyhow::{Context, Result};
use log::debug;

use crate::config::{CommonConfig, PathSet};

use super::config::ClientConfig;
use super::Client;

pub struct ClientFactory {
    cfg: ClientConfig,
}

impl ClientFactory {
    pub fn load(ps: &PathSet) -> Result<Self> {
        let cfg = ps.load_config("client", ClientConfig::default)?;
        Ok(Self { cfg })
    }

    pub fn build_client(&self) -> Result<Client> {
        let mut client = Client::connect(&self.cfg.server, &self.cfg.cert_path, self.cfg.insecure)
            .context("connect to server")?;

        match self.cfg.read_token()? {
            Some(token) => client.set_token(token),
            None => debug!("No token configured, send requests anonymously"),
        }

        Ok(client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }
}
