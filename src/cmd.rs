use std::io;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use log::debug;
use whocan::client::factory::ClientFactory;
use whocan::config::ConfigArgs;
use whocan::display::{self, DisplayStyle};
use whocan::logs;
use whocan::mapper::discovery;
use whocan::review;
use whocan::types::review::ReviewOptions;

#[async_trait]
pub trait RunCommand {
    async fn run(&self) -> Result<()>;
}

/// List who can perform the specified action on a resource.
#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    /// The action to check, e.g. get, list, create, delete.
    pub verb: String,

    /// The resource to check: `resource`, `resource.group` or
    /// `resource.version.group`. Singular and short names are accepted.
    pub resource: String,

    /// If present, list who can perform the specified action in all namespaces.
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// The namespace to check, default is the `namespace` in config.
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// The display style.
    #[arg(short, long, default_value = "text")]
    pub output: DisplayStyle,

    /// Log level: error, warn, info or debug. Overrides the `log_level` in config.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for App {
    async fn run(&self) -> Result<()> {
        // Start logging before the config is read so its warnings are shown,
        // then narrow to the configured level.
        logs::init(self.log_level.as_deref().unwrap_or("warn"))?;

        let ps = self.config.build_path_set()?;
        let client_factory = ClientFactory::load(&ps).context("load client config")?;
        let cfg = client_factory.config();
        if self.log_level.is_none() {
            logs::set_level(&cfg.log_level)?;
        }
        debug!("Use config: {:?}", cfg);

        let client = client_factory.build_client()?;
        let mapper = discovery::discover(&client).await?;

        let opts = ReviewOptions {
            all_namespaces: self.all_namespaces,
            namespace: self
                .namespace
                .clone()
                .unwrap_or_else(|| cfg.namespace.clone()),
        };
        let result =
            review::who_can(&mapper, &client, &self.verb, &self.resource, &opts).await?;

        let mut stdout = io::stdout().lock();
        display::display_report(
            &mut stdout,
            &result.response,
            &result.verb,
            &result.resource,
            self.output,
        )
    }
}
