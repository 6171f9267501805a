use anyhow::Context;
use folio::{
    api::GeminiClient, app::App, config::Config, logging::init_logging, profile::Profile,
    ui::run_ui,
};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    // Dropping the handle would stop the file writer.
    let _logger = init_logging(&config).context("Failed to initialize logging")?;

    let profile = match &config.profile_path {
        Some(path) => {
            info!("Loading profile from {}", path.display());
            Profile::from_file(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?
        }
        None => Profile::builtin(),
    };
    let profile = Arc::new(profile);

    let client = Arc::new(GeminiClient::new(&config, &profile)?);
    info!(
        "Starting folio for {} (model {}, endpoint {})",
        profile.name,
        config.model,
        client.endpoint().path()
    );

    let (app, events) = App::new(profile, client);
    run_ui(app, events).await?;

    info!("Goodbye");
    Ok(())
}
