use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SolveArgs;
use crate::error::{CliError, Result};
use isingmc::engine::config as core_config;
use std::str::FromStr;

pub fn build_config(args: &SolveArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let search_file = file_config.search.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let samples_per_state = args
        .samples_per_state
        .or(search_file.samples_per_state)
        .unwrap_or(defaults.samples_per_state);
    let chunk_size = args
        .chunk_size
        .or(search_file.chunk_size)
        .unwrap_or(defaults.chunk_size);
    let seed = args.seed.or(search_file.seed);
    let max_iterations = args.max_iterations.or(search_file.max_iterations);

    let core_config = core_config::SearchConfigBuilder::new()
        .samples_per_state(samples_per_state)
        .chunk_size(chunk_size)
        .seed(seed)
        .max_iterations(max_iterations)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        output_directory: output_file
            .directory
            .unwrap_or(defaults.output_directory),
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid integer value for {}: {}", key, value))
    })
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
            "search.seed" => {
                config.search.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str)?);
            }
            "search.samples-per-state" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .samples_per_state = Some(parse_value(key, value_str)?);
            }
            "search.max-iterations" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .max_iterations = Some(parse_value(key, value_str)?);
            }
            "search.chunk-size" => {
                config.search.get_or_insert_with(Default::default).chunk_size =
                    Some(parse_value(key, value_str)?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(value_str.into());
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
