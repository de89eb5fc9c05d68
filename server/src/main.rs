use server_lib::config::SiteConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    info!(
        site_root = %config.site_root,
        pkg_dir = %config.site_pkg_dir,
        "Serving participant instructions"
    );

    server_lib::run(config).await?;

    Ok(())
}
