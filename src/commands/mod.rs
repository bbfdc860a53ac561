pub mod add;
pub mod check;
pub mod formats;
pub mod scan;

use crate::cli::{Commands, ResolverArgs};
use crate::errors::SaveNameResult;
use crate::save::{CaseSensitivity, SaveGameFormat};
use crate::utils::config::{CasePolicy, Config};

pub fn handle_command(command: Commands, config: &mut Config) -> SaveNameResult<()> {
    match command {
        Commands::Add { name, force, resolver } => {
            apply_overrides(&resolver, config)?;
            let (format, case) = resolve_policy(config);
            add::handle(&name, force, format, case)
        }
        Commands::Check { names, resolver } => {
            apply_overrides(&resolver, config)?;
            let (format, case) = resolve_policy(config);
            check::handle(&names, format, case)
        }
        Commands::Scan { path, verbose, resolver } => {
            apply_overrides(&resolver, config)?;
            let (format, case) = resolve_policy(config);
            scan::handle(&path, verbose, format, case, config)
        }
        Commands::Formats => formats::handle(config.resolver.format),
    }
}

/// Command-line values win over the config file.
fn apply_overrides(args: &ResolverArgs, config: &mut Config) -> SaveNameResult<()> {
    if let Some(format) = &args.format {
        config.resolver.format = format.parse()?;
    }
    if let Some(case) = &args.case {
        config.resolver.case_sensitivity = case.parse()?;
    }
    Ok(())
}

fn resolve_policy(config: &Config) -> (SaveGameFormat, CaseSensitivity) {
    let format = config.resolver.format;
    let case = config.resolver.case_sensitivity.resolve();
    if config.resolver.case_sensitivity == CasePolicy::Auto {
        tracing::debug!(%case, "case sensitivity detected from host");
    }
    (format, case)
}

#[test]
fn overrides_replace_config_values() {
    let mut cfg = Config::default();
    let args = ResolverArgs {
        format: Some("proxy-serialization".into()),
        case: Some("insensitive".into()),
    };

    apply_overrides(&args, &mut cfg).unwrap();

    assert_eq!(
        resolve_policy(&cfg),
        (SaveGameFormat::ProxySerialization, CaseSensitivity::Insensitive)
    );
}

#[test]
fn missing_overrides_keep_config_values() {
    let mut cfg = Config::default();
    cfg.resolver.case_sensitivity = CasePolicy::Sensitive;

    apply_overrides(&ResolverArgs::default(), &mut cfg).unwrap();

    assert_eq!(
        resolve_policy(&cfg),
        (SaveGameFormat::Serialization, CaseSensitivity::Sensitive)
    );
}

#[test]
fn bad_override_is_an_error() {
    let mut cfg = Config::default();
    let args = ResolverArgs { format: Some("zip".into()), case: None };
    assert!(apply_overrides(&args, &mut cfg).is_err());
    assert_eq!(cfg.resolver.format, SaveGameFormat::Serialization);
}
