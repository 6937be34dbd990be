use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const CONFIG_DIR_VARIABLE: &str = "APP_CONFIG_DIR";
const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Loads settings from `configuration/base.yaml` (`test.yaml` under test),
/// an optional `configuration/<APP_ENVIRONMENT>.yaml` overlay and finally
/// `APP_`-prefixed environment variables, e.g. `APP_IDENTITY__SECRET_KEY`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let directory = configuration_directory()?;
    config_from(&directory)
}

pub fn config_from<Settings: DeserializeOwned>(directory: &Path) -> anyhow::Result<Settings> {
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    let mut builder =
        config::Config::builder().add_source(config::File::from(directory.join(file)));

    if let Ok(environment) = std::env::var(ENVIRONMENT_VARIABLE) {
        builder = builder.add_source(
            config::File::from(directory.join(format!("{environment}.yaml"))).required(false),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {directory:?}"))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

fn configuration_directory() -> anyhow::Result<PathBuf> {
    if let Ok(directory) = std::env::var(CONFIG_DIR_VARIABLE) {
        return Ok(PathBuf::from(directory));
    }
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    Ok(base_path.join("configuration"))
}

#[cfg(test)]
mod tests {
    use super::config_from;
    use serde::Deserialize;
    use std::fs;

    #[derive(Deserialize, Debug)]
    struct Application {
        port: u16,
    }

    #[derive(Deserialize, Debug)]
    struct Settings {
        application: Application,
    }

    #[test]
    fn test_settings_are_read_from_the_test_file() {
        let directory = std::env::temp_dir().join("shared_kernel_configuration_test");
        fs::create_dir_all(&directory).unwrap();
        fs::write(directory.join("test.yaml"), "application:\n  port: 8081\n").unwrap();

        let settings = config_from::<Settings>(&directory).unwrap();

        assert_eq!(settings.application.port, 8081);
    }

    #[test]
    fn test_missing_configuration_file_is_an_error() {
        let directory = std::env::temp_dir().join("shared_kernel_configuration_missing");
        let _ = fs::remove_dir_all(&directory);

        let result = config_from::<Settings>(&directory);

        assert!(result.is_err());
    }
}
