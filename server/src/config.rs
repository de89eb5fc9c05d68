use crate::error::{Result, SiteError};
use leptos::prelude::LeptosOptions;
use std::net::SocketAddr;

pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "target/site";
pub const DEFAULT_SITE_PKG_DIR: &str = "pkg";
pub const DEFAULT_OUTPUT_NAME: &str = "frontend";

/// Where the server listens and where the compiled site bundle lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub site_root: String,
    pub site_pkg_dir: String,
    pub output_name: String,
}

impl SiteConfig {
    /// Read the configuration from the environment (and `.env`, if present).
    ///
    /// Variable names match the ones cargo-leptos exports, so `cargo leptos
    /// watch` and a plain release binary read the same settings.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let addr = env_or("LEPTOS_SITE_ADDR", DEFAULT_SITE_ADDR)
            .parse::<SocketAddr>()
            .map_err(|_| SiteError::Config("Invalid LEPTOS_SITE_ADDR".to_string()))?;

        Ok(Self {
            addr,
            site_root: env_or("LEPTOS_SITE_ROOT", DEFAULT_SITE_ROOT),
            site_pkg_dir: env_or("LEPTOS_SITE_PKG_DIR", DEFAULT_SITE_PKG_DIR),
            output_name: env_or("LEPTOS_OUTPUT_NAME", DEFAULT_OUTPUT_NAME),
        })
    }

    pub fn leptos_options(&self) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name(self.output_name.as_str())
            .site_pkg_dir(self.site_pkg_dir.as_str())
            .site_root(self.site_root.as_str())
            .site_addr(self.addr)
            .build()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            site_root: DEFAULT_SITE_ROOT.to_string(),
            site_pkg_dir: DEFAULT_SITE_PKG_DIR.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    dotenvy::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
