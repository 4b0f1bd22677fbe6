// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::Settings;

/// Loads the data-location settings from the process environment.
///
/// This function is the primary entry point for this crate. A `.env` file
/// in the working directory is honored when present, matching how the
/// dashboard deployment supplies its variables; the variables may equally
/// come from the real environment. A missing or empty variable is a fatal
/// startup error, never a silent default.
pub fn load_settings() -> Result<Settings, ConfigError> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let builder = config::Config::builder()
        // Maps VANGUARD_DATA_DIR -> data_dir, VANGUARD_EVENTS_FILE -> events_file.
        .add_source(config::Environment::with_prefix("VANGUARD"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(
        data_dir = %settings.data_dir,
        events_file = %settings.events_file,
        "configuration loaded"
    );

    Ok(settings)
}
