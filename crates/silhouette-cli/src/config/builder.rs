use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use silhouette::engine::config::ScanConfigBuilder;
use std::path::PathBuf;

pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let grid_file = file_config.grid.take().unwrap_or_default();
    let step = args.step.or(grid_file.step).unwrap_or(defaults.step);
    let radius = args.radius.or(grid_file.radius).unwrap_or(defaults.radius);

    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.output.take().and_then(|o| o.path))
        .unwrap_or_else(|| PathBuf::from(&defaults.output_path));

    let core_config = ScanConfigBuilder::new()
        .step(step)
        .radius(radius)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path,
        core_config,
    })
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value_str)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "grid.step" => {
                config.grid.get_or_insert_with(Default::default).step =
                    Some(parse_float(key, value_str)?);
            }
            "grid.radius" => {
                config.grid.get_or_insert_with(Default::default).radius =
                    Some(parse_float(key, value_str)?);
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
