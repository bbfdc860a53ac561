use crate::errors::SaveNameResult;
use crate::save::{self, CaseSensitivity, SaveGameFormat};
use crate::utils::config::Config;
use crate::walk::spawn_senders;
use bytesize::ByteSize;
use chrono::{DateTime, Local};
use console::style;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug)]
pub struct SaveFile {
    pub(crate) path: PathBuf,
    pub(crate) kind: save::SaveFileMatch,
    pub(crate) size: Option<u64>,
    pub(crate) modified: Option<SystemTime>,
}

/// Entry point called by the CLI.
pub fn handle(
    path: &str,
    verbose: bool,
    format: SaveGameFormat,
    case: CaseSensitivity,
    config: &Config,
) -> SaveNameResult<()> {
    let scan_path = Path::new(path).canonicalize()?;
    let found = find_saves(&scan_path, format, case, config)?;
    let (saves, total) = limit_results(found, config.output.max_results);

    if !config.output.quiet {
        println!(
            "{} {} saves under {} ({}, case {})",
            style("Found").blue().bold(),
            total,
            style(scan_path.display()).underlined(),
            format,
            case,
        );
    }

    for s in &saves {
        println!("  {}", style(s.path.display()).white().bold());

        if verbose {
            let size = s
                .size
                .map(|b| ByteSize::b(b).to_string())
                .unwrap_or_else(|| "?".into());
            let mtime = s
                .modified
                .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "?".into());
            println!("    {:10} {:?}", style("Kind"), s.kind);
            println!("    {:10} {}", style("Size"), size);
            println!("    {:10} {}", style("Modified"), mtime);
        }
    }

    if saves.len() < total && !config.output.quiet {
        println!("  {}", style(format!("… {} more not shown", total - saves.len())).dim());
    }
    Ok(())
}

/// Keep at most `max` saves; also returns how many there were before the cut.
fn limit_results(mut saves: Vec<SaveFile>, max: Option<u32>) -> (Vec<SaveFile>, usize) {
    let total = saves.len();
    if let Some(max) = max {
        saves.truncate(max as usize);
    }
    (saves, total)
}

/// Walk `root` and collect every save candidate, sorted by path.
pub fn find_saves(
    root: &Path,
    format: SaveGameFormat,
    case: CaseSensitivity,
    cfg: &Config,
) -> SaveNameResult<Vec<SaveFile>> {
    let rx = spawn_senders(root, cfg, format, case)?;

    let mut saves: Vec<SaveFile> = rx
        .into_iter()
        .flatten()
        .par_bridge()
        .filter_map(|path| describe(path, format, case))
        .collect();

    saves.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(count = saves.len(), "scan finished");
    Ok(saves)
}

fn describe(path: PathBuf, format: SaveGameFormat, case: CaseSensitivity) -> Option<SaveFile> {
    let name = path.file_name()?.to_str()?;
    let kind = save::match_candidate(name, format, case)?;

    let (size, modified) = match fs::metadata(&path) {
        Ok(meta) => (Some(meta.len()), meta.modified().ok()),
        Err(e) => {
            tracing::debug!("metadata failed for {:?}: {e}", path);
            (None, None)
        }
    };

    Some(SaveFile { path, kind, size, modified })
}

#[test]
fn find_saves_classifies_and_sorts() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::write(root.join("b.svg"), b"12345").unwrap();
    std::fs::write(root.join("a.tsvg"), b"").unwrap();
    std::fs::write(root.join("ctsvg.gz"), b"").unwrap();
    std::fs::write(root.join("notes.txt"), b"").unwrap();

    let saves = find_saves(
        root,
        SaveGameFormat::Serialization,
        CaseSensitivity::Sensitive,
        &Config::default(),
    )
    .unwrap();

    let got: Vec<_> = saves
        .iter()
        .map(|s| (s.path.file_name().unwrap().to_str().unwrap(), s.kind))
        .collect();
    assert_eq!(
        got,
        vec![
            ("a.tsvg", save::SaveFileMatch::Primary),
            ("b.svg", save::SaveFileMatch::Legacy("svg")),
            ("ctsvg.gz", save::SaveFileMatch::MacOsAlternative),
        ]
    );
    assert_eq!(saves[1].size, Some(5));
}

#[test]
fn find_saves_for_proxy_format_ignores_legacy_names() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::write(root.join("old.svg"), b"").unwrap();
    std::fs::write(root.join("new.tsvgx"), b"").unwrap();

    let saves = find_saves(
        root,
        SaveGameFormat::ProxySerialization,
        CaseSensitivity::Sensitive,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(saves.len(), 1);
    assert!(saves[0].path.ends_with("new.tsvgx"));
}

#[cfg(test)]
fn fake_saves(names: &[&str]) -> Vec<SaveFile> {
    names
        .iter()
        .map(|n| SaveFile {
            path: PathBuf::from(n),
            kind: save::SaveFileMatch::Primary,
            size: None,
            modified: None,
        })
        .collect()
}

#[test]
fn limit_results_keeps_first_n_and_reports_total() {
    let (kept, total) = limit_results(fake_saves(&["a.tsvg", "b.tsvg", "c.tsvg"]), Some(2));
    assert_eq!(total, 3);
    assert_eq!(
        kept.iter().map(|s| s.path.clone()).collect::<Vec<_>>(),
        ["a.tsvg", "b.tsvg"].map(PathBuf::from)
    );

    let (kept, total) = limit_results(fake_saves(&["a.tsvg", "b.tsvg", "c.tsvg"]), Some(0));
    assert!(kept.is_empty());
    assert_eq!(total, 3);
}

#[test]
fn limit_results_without_max_keeps_everything() {
    let (kept, total) = limit_results(fake_saves(&["a.tsvg", "b.tsvg"]), None);
    assert_eq!((kept.len(), total), (2, 2));

    let (kept, total) = limit_results(fake_saves(&["a.tsvg"]), Some(5));
    assert_eq!((kept.len(), total), (1, 1));
}
