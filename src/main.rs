// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use o2ims_client::config::Config;
use o2ims_client::kubernetes::{ObjectKey, ResourceClient};
use o2ims_client::types::{ProvisioningRequest, ProvisioningRequestList};
use o2ims_client::{Filter, ProvisioningRequestListOptions};

/// Query an O2IMS server configured through `O2IMS_*` environment variables
#[derive(Parser, Debug)]
#[command(name = "o2ims", disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List managed infrastructure templates
    Templates {
        /// Only list templates with this name
        name: Option<String>,
    },
    /// Show a template and its defaults
    Template {
        /// Template id
        id: String,
    },
    /// List provisioning requests
    Requests {
        /// Only list requests with this name
        name: Option<String>,
    },
    /// Show a provisioning request
    Request {
        /// Provisioning request UUID
        id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(config: &Config, command: Command) -> Result<()> {
    let builder = config.builder();

    match command {
        Command::Templates { name } => {
            let filters: Vec<Filter> = name
                .iter()
                .map(|n| Filter::equals("name", n.as_str()))
                .collect();
            let templates = builder
                .build_artifacts()?
                .list_managed_infrastructure_templates(&filters)
                .await?;
            print_json(&templates)
        }
        Command::Template { id } => {
            let artifacts = builder.build_artifacts()?;
            let template = artifacts.get_managed_infrastructure_template(&id).await?;
            let defaults = artifacts
                .get_managed_infrastructure_template_defaults(&id)
                .await?;
            print_json(&serde_json::json!({
                "template": template,
                "defaults": defaults,
            }))
        }
        Command::Requests { name } => {
            let client = builder.build_provisioning()?;
            let mut list = ProvisioningRequestList::default();
            match name {
                Some(name) => {
                    let filter = Filter::equals("name", name.as_str());
                    let options = ProvisioningRequestListOptions::with_filter(&filter);
                    client.list(&mut list, &[&options]).await?
                }
                None => client.list(&mut list, &[]).await?,
            }
            print_json(&list.items)
        }
        Command::Request { id } => {
            let client = builder.build_provisioning()?;
            let mut request = ProvisioningRequest::default();
            client.get(&ObjectKey::new(id), &mut request).await?;
            print_json(&request)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!(base_url = %config.base_url, "Configuration loaded");

    run(&config, cli.command).await
}
