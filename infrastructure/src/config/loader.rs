//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "cert-quiz";
const PROJECT_FILES: [&str; 2] = ["cert-quiz.toml", ".cert-quiz.toml"];
const ENV_PREFIX: &str = "CERT_QUIZ_";

/// Explicit set of config files to merge, lowest priority first
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the global and project files that exist on disk
    pub fn discover(explicit: Option<&PathBuf>) -> Self {
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(),
            explicit: explicit.cloned(),
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CERT_QUIZ_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./cert-quiz.toml` or `./.cert-quiz.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/cert-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(&ConfigPaths::discover(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load from the given files only, without environment overrides
    pub fn load_paths(paths: &ConfigPaths) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(paths).extract().map_err(Box::new)
    }

    fn figment(paths: &ConfigPaths) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [&paths.global, &paths.project, &paths.explicit]
            .into_iter()
            .flatten()
        {
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/cert-quiz/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Environment: {ENV_PREFIX}<SECTION>__<KEY>");

        match explicit {
            Some(path) if path.exists() => println!("  [FOUND] Explicit: {}", path.display()),
            Some(path) => println!("  [MISS ] Explicit: {}", path.display()),
            None => println!("  [     ] Explicit: --config <path>"),
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./cert-quiz.toml or ./.cert-quiz.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::OutputFormat;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.bank.path.is_none());
        assert_eq!(config.scoring.passing_score, 70);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("cert-quiz"));
    }

    #[test]
    fn test_no_files_yields_defaults() {
        let config = ConfigLoader::load_paths(&ConfigPaths::default()).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = write(
            dir.path(),
            "global.toml",
            "[scoring]\npassing_score = 60\nexcellent_score = 90\n[output]\ncolor = false\n",
        );
        let project = write(dir.path(), "project.toml", "[scoring]\npassing_score = 65\n");
        let explicit = write(dir.path(), "explicit.toml", "[output]\nformat = \"json\"\n");

        let config = ConfigLoader::load_paths(&ConfigPaths {
            global: Some(global),
            project: Some(project),
            explicit: Some(explicit),
        })
        .unwrap();

        assert_eq!(config.scoring.passing_score, 65);
        assert_eq!(config.scoring.excellent_score, 90);
        assert!(!config.output.color);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write(dir.path(), "broken.toml", "[scoring\npassing_score = ");
        let result = ConfigLoader::load_paths(&ConfigPaths {
            explicit: Some(broken),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.toml", "[scoring]\npassing_score = \"high\"\n");
        let result = ConfigLoader::load_paths(&ConfigPaths {
            explicit: Some(bad),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_project_config_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        write(dir.path(), ".cert-quiz.toml", "");
        assert!(
            ConfigLoader::project_config_in(dir.path())
                .unwrap()
                .ends_with(".cert-quiz.toml")
        );

        write(dir.path(), "cert-quiz.toml", "");
        assert!(
            ConfigLoader::project_config_in(dir.path())
                .unwrap()
                .ends_with("cert-quiz.toml")
        );
    }
}
