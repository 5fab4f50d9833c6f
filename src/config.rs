use anyhow::Context;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    pub format: FormatConfig,
}

#[derive(Debug, serde::Deserialize)]
pub struct FormatConfig {
    pub line_width: usize,
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_width: 100,
            indent_size: 4,
        }
    }
}

pub fn config_of_path(file_path: &Path) -> anyhow::Result<Config> {
    match file_path.parent() {
        Some(dir_path) => config_of_dir(dir_path),
        None => Ok(Config::default()),
    }
}

pub fn config_of_dir(dir_path: &Path) -> anyhow::Result<Config> {
    let config_path = find_config_file_path(dir_path);
    let config = match config_path {
        Some(config_path) => {
            let config_file = File::open(&config_path)
                .with_context(|| format!("failed to open config file: {config_path:?}"))?;
            let reader = BufReader::new(config_file);
            serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to read config file: {config_path:?}"))?
        }
        None => {
            log::debug!("no config file found under {dir_path:?}, using defaults");
            Config::default()
        }
    };
    Ok(config)
}

fn find_config_file_path(base: &Path) -> Option<PathBuf> {
    let config_path = base.join(".docfmt.yml");
    if config_path.exists() {
        return Some(config_path);
    }
    if let Some(parent) = base.parent() {
        return find_config_file_path(parent);
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.format.line_width, 100);
        assert_eq!(config.format.indent_size, 4);
    }
}
