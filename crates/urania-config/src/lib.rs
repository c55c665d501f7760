use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use urania::HouseSystem;

const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];
const STORE_FILE_NAME: &str = "profiles.v1.json";

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_level: String,
    pub profile_store_path: PathBuf,
    /// Used when an input does not name a house system
    pub house_system: HouseSystem,
    /// File the settings were read from, if any
    pub config_path: Option<PathBuf>,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            profile_store_path: default_store_path(),
            house_system: HouseSystem::Equal,
            config_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProfilesToml {
    #[serde(default)]
    store_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    house_system: Option<HouseSystem>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    profiles: ProfilesToml,
    #[serde(default)]
    chart: ChartToml,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `<data dir>/urania/profiles.v1.json`, or the working directory when the
/// platform has no data dir.
pub fn default_store_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("urania").join(STORE_FILE_NAME),
        None => PathBuf::from(STORE_FILE_NAME),
    }
}

/// Try the common relative paths for `configs/urania.toml`.
pub fn read_config_toml_text() -> Option<(PathBuf, String)> {
    CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    Ok(UraniaSettings {
        log_level: root.log_level,
        profile_store_path: root
            .profiles
            .store_path
            .unwrap_or_else(default_store_path),
        house_system: root.chart.house_system.unwrap_or_default(),
        config_path: None,
    })
}

/// Settings from `configs/urania.toml`, or defaults when no file exists.
///
/// Runs before logging is set up; callers report `config_path` themselves.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    match read_config_toml_text() {
        Some((path, text)) => {
            let settings = parse_settings(&text)?;
            Ok(UraniaSettings {
                config_path: Some(path),
                ..settings
            })
        }
        None => Ok(UraniaSettings::default()),
    }
}

/// Relative paths searched by [`load_settings`], in order
pub fn config_search_paths() -> &'static [&'static str] {
    &CONFIG_PATHS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, UraniaSettings::default());
        assert_eq!(settings.log_level, "info");
        assert!(settings.profile_store_path.ends_with("profiles.v1.json"));
    }

    #[test]
    fn test_full_file() {
        let text = r#"
log_level = "debug"

[profiles]
store_path = "/tmp/urania/profiles.json"

[chart]
house_system = "Placidus"
"#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(
            settings.profile_store_path,
            PathBuf::from("/tmp/urania/profiles.json")
        );
        assert_eq!(settings.house_system, HouseSystem::Placidus);
    }

    #[test]
    fn test_unknown_house_system_is_an_error() {
        let err = parse_settings("[chart]\nhouse_system = \"Whole\"\n").unwrap_err();
        assert!(err.to_string().contains("urania.toml"));
    }

    #[test]
    fn test_load_settings_reports_source_file() {
        // Tests run from the crate directory, where only the workspace path resolves
        let settings = load_settings().unwrap();
        assert_eq!(
            settings.config_path,
            Some(PathBuf::from("../../configs/urania.toml"))
        );
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_settings("log_level = ").is_err());
    }
}
