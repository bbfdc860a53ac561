use crate::errors::{SaveNameError, SaveNameResult};
use crate::save::{CaseSensitivity, SaveGameFormat};
use crate::utils::platform;
use console::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

static DEFAULT_CONFIG_TOML: &str = include_str!("../../default-savename.conf");

/// Case policy as written in the config file; `auto` defers to the host.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    #[default]
    Auto,
    Sensitive,
    Insensitive,
}

impl CasePolicy {
    pub fn resolve(self) -> CaseSensitivity {
        match self {
            CasePolicy::Auto => platform::host_case_sensitivity(),
            CasePolicy::Sensitive => CaseSensitivity::Sensitive,
            CasePolicy::Insensitive => CaseSensitivity::Insensitive,
        }
    }
}

impl FromStr for CasePolicy {
    type Err = SaveNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().eq_ignore_ascii_case("auto") {
            return Ok(CasePolicy::Auto);
        }
        Ok(match input.parse::<CaseSensitivity>()? {
            CaseSensitivity::Sensitive => CasePolicy::Sensitive,
            CaseSensitivity::Insensitive => CasePolicy::Insensitive,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Format new saves are named for and scans look for.
    pub format: SaveGameFormat,

    /// Whether the save directory's filesystem is case sensitive.
    pub case_sensitivity: CasePolicy,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ScannerConfig {
    /// Directories to exclude from scanning.
    pub excluded_directories: Vec<String>,

    /// Whether to respect VCS ignore files (`.gitignore`, ..) or not.
    pub read_vcsignore: bool,

    /// Whether to follow symlinks or not.
    pub follow_symlinks: bool,

    /// Whether to scan hidden files or not.
    pub scan_hidden_files: bool,

    /// The maximum search depth, or `None` if no maximum search depth should be set.
    ///
    /// A depth of `1` includes all files under the scanned directory, a depth of `2` also includes
    /// all files under its subdirectories, etc.
    pub max_depth: Option<usize>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            excluded_directories: vec![".git", "target", "node_modules"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            read_vcsignore: false,
            follow_symlinks: false,
            scan_hidden_files: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Suppress the informational notes printed around results.
    pub quiet: bool,

    /// The maximum number of results to show.
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    /// The maximum number of worker threads to use, or `None` to auto-detect.
    pub worker_threads: Option<usize>,

    /// Paths collected per walker thread before they are sent.
    pub batch_size: usize,

    /// capacity = threads × this
    pub channel_multiplier: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            batch_size: 8usize,
            channel_multiplier: 4usize,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub scanner: ScannerConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

impl Config {
    pub fn load(config_dir: &Path) -> SaveNameResult<Self> {
        let mut config = Config::default();

        let default_config_path = config_dir.join("savename.conf");
        if !default_config_path.exists() {
            create_example_config(config_dir)?;
        }

        let user_config_path = config_dir.join("savename.local");
        if user_config_path.exists() {
            let user_config_content = fs::read_to_string(&user_config_path)?;
            let user_config: Config = toml::from_str(&user_config_content)?;

            config = merge_configs(config, user_config);

            tracing::debug!("loaded user config from {}", user_config_path.display());
            if !config.output.quiet {
                eprintln!(
                    "{}: Loaded user config from: {}\n",
                    style("note").green().bold(),
                    style(user_config_path.display()).underlined().white().bold()
                );
            }
        } else {
            tracing::debug!("no user config at {}", user_config_path.display());
        }

        Ok(config)
    }
}

fn create_example_config(config_dir: &Path) -> SaveNameResult<()> {
    let example_path = config_dir.join("savename.conf");
    if !example_path.exists() {
        fs::write(&example_path, DEFAULT_CONFIG_TOML)?;
        tracing::debug!("Example config created at: {}", example_path.display());
    }
    Ok(())
}

/// Merge user config into default config, preserving default exclusions and
/// overriding everything else.
fn merge_configs(mut default: Config, user: Config) -> Config {
    // --- ResolverConfig ---
    default.resolver = user.resolver;

    // --- ScannerConfig ---
    default.scanner.read_vcsignore = user.scanner.read_vcsignore;
    default.scanner.follow_symlinks = user.scanner.follow_symlinks;
    default.scanner.scan_hidden_files = user.scanner.scan_hidden_files;
    default.scanner.max_depth = user.scanner.max_depth;

    // default ⊔ user, then sort & dedupe
    default
        .scanner
        .excluded_directories
        .extend(user.scanner.excluded_directories);
    default.scanner.excluded_directories.sort_unstable();
    default.scanner.excluded_directories.dedup();

    // --- OutputConfig ---
    default.output = user.output;

    // --- PerformanceConfig ---
    default.performance = user.performance;

    default
}

#[test]
fn bundled_config_parses_to_defaults() {
    let cfg: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
    let default = Config::default();

    assert_eq!(cfg.resolver.format, default.resolver.format);
    assert_eq!(cfg.resolver.case_sensitivity, default.resolver.case_sensitivity);
    assert_eq!(cfg.scanner.excluded_directories, default.scanner.excluded_directories);
    assert_eq!(cfg.performance.batch_size, default.performance.batch_size);
}

#[test]
fn merge_configs_dedupes_directories() {
    let mut default_cfg = Config::default();
    default_cfg.scanner.excluded_directories = vec!["target".into(), ".git".into()];

    let mut user_cfg = Config::default();
    user_cfg.scanner.excluded_directories = vec!["backups".into(), "target".into()];
    user_cfg.resolver.format = SaveGameFormat::ProxySerialization;

    let merged = merge_configs(default_cfg, user_cfg);

    assert_eq!(merged.scanner.excluded_directories, vec![".git", "backups", "target"]);
    assert_eq!(merged.resolver.format, SaveGameFormat::ProxySerialization);
}

#[test]
fn load_creates_example_and_reads_user_overrides() {
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path();

    let user_toml = r#"
        [resolver]
        format = "proxy-serialization"
        case_sensitivity = "insensitive"

        [scanner]
        excluded_directories = ["old-saves"]
        max_depth = 2

        [output]
        quiet = true
    "#;
    fs::write(cfg_path.join("savename.local"), user_toml).unwrap();

    let cfg = Config::load(cfg_path).expect("Config::load should succeed");

    assert!(cfg_path.join("savename.conf").is_file());

    assert_eq!(cfg.resolver.format, SaveGameFormat::ProxySerialization);
    assert_eq!(cfg.resolver.case_sensitivity.resolve(), CaseSensitivity::Insensitive);
    assert_eq!(cfg.scanner.max_depth, Some(2));
    assert!(cfg.output.quiet);
    assert!(cfg.scanner.excluded_directories.contains(&"old-saves".to_string()));
    assert!(cfg.scanner.excluded_directories.contains(&".git".to_string()));

    assert!(!cfg.scanner.follow_symlinks);
}

#[test]
fn load_rejects_unknown_format_in_user_config() {
    let cfg_dir = tempfile::tempdir().unwrap();
    fs::write(
        cfg_dir.path().join("savename.local"),
        "[resolver]\nformat = \"xml\"\n",
    )
    .unwrap();

    assert!(matches!(Config::load(cfg_dir.path()), Err(SaveNameError::Config(_))));
}

#[test]
fn case_policy_parses_auto_and_explicit_values() {
    assert_eq!("auto".parse::<CasePolicy>().unwrap(), CasePolicy::Auto);
    assert_eq!("Sensitive".parse::<CasePolicy>().unwrap(), CasePolicy::Sensitive);
    assert_eq!("insensitive".parse::<CasePolicy>().unwrap(), CasePolicy::Insensitive);
    assert!(matches!(
        "maybe".parse::<CasePolicy>(),
        Err(SaveNameError::UnknownCaseSensitivity(_))
    ));
    assert_eq!(CasePolicy::Auto.resolve(), platform::host_case_sensitivity());
}
