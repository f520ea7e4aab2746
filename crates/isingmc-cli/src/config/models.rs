use isingmc::core::io::result::output_file_name;
use isingmc::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    /// Explicit result path; when absent the name is derived from the graph label.
    pub output_path: Option<PathBuf>,
    pub output_directory: PathBuf,
    pub core_config: core_config::SearchConfig,
}

impl AppConfig {
    pub fn resolve_output_path(&self, label: &str) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self.output_directory.join(output_file_name(label)),
        }
    }
}
