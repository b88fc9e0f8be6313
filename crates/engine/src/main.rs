//! Rollcall Engine - demo driver.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rollcall_engine::{App, EngineConfig};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollcall_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Rollcall Engine");

    let config = EngineConfig::from_env().context("loading configuration from environment")?;
    tracing::info!(
        sides = config.dice_sides,
        rolls = config.roll_count,
        generator = %config.generator,
        mode = %config.roll_mode,
        "Configuration loaded"
    );

    let app = App::new(config).context("composing application")?;
    let report = app.run_demo();

    for line in report.stdout_lines() {
        println!("{}", line);
    }

    tracing::info!("Demo finished");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
