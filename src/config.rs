use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{GeoLocation, User, UserId, Viewer};
use crate::views::Theme;

#[derive(Parser, Debug)]
#[command(name = "neighborly", about = "A neighborhood social board")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory searched for config.toml
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub viewer: ViewerConfig,
    pub neighborhood: NeighborhoodConfig,
    pub ui: UiConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Identity every request is served as. There is no login.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub address: String,
    pub bio: Option<String>,
    pub joined: NaiveDate,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NeighborhoodConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Load the canned feed, help board and calendar at startup
    pub seed: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    pub site_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            id: "currentUser".to_string(),
            name: "Alex Johnson".to_string(),
            avatar: "/assets/img/avatar-placeholder.svg".to_string(),
            address: "12 Maple Street".to_string(),
            bio: None,
            joined: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self {
            latitude: 34.052235,
            longitude: -118.243683,
            seed: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
            site_name: "Neighborly".to_string(),
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let data_dir = Self::data_dir(cli);
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // CLI overrides
        if let Some(ref host) = cli.host {
            config.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }

        Ok(config)
    }

    pub fn data_dir(cli: &Cli) -> PathBuf {
        cli.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".neighborly")
        })
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.neighborhood.latitude, self.neighborhood.longitude)
    }

    pub fn viewer(&self) -> Viewer {
        let v = &self.viewer;
        Viewer::new(
            User {
                id: UserId::new(v.id.clone()),
                name: v.name.clone(),
                avatar: v.avatar.clone(),
                address: v.address.clone(),
                bio: v.bio.clone(),
                joined_date: v.joined,
            },
            self.location(),
        )
    }
}
