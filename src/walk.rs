use crossbeam_channel::{bounded, Receiver, Sender};
use ignore::{overrides::OverrideBuilder, WalkBuilder, WalkState};
use std::{
    mem,
    path::{Path, PathBuf},
    thread,
};

use crate::errors::{SaveNameError, SaveNameResult};
use crate::save::{self, CaseSensitivity, SaveGameFormat};
use crate::utils::Config;

type Batch = Vec<PathBuf>;

struct Batcher {
    tx:    Sender<Batch>,
    batch: Batch,
    limit: usize,
}
impl Batcher {
    fn push(&mut self, p: PathBuf) {
        self.batch.push(p);
        if self.batch.len() >= self.limit {
            self.flush();
        }
    }
    fn flush(&mut self) {
        if !self.batch.is_empty() {
            let _ = self.tx.send(mem::take(&mut self.batch));
        }
    }
}
impl Drop for Batcher {
    fn drop(&mut self) { self.flush(); }
}

// ---------------------------------------------------------------------------
/// Walk `root` and send *batches* of save-candidate paths through the
/// returned channel. The channel closes once the walk is finished.
pub fn spawn_senders(
    root: &Path,
    cfg: &Config,
    format: SaveGameFormat,
    case: CaseSensitivity,
) -> SaveNameResult<Receiver<Batch>> {
    // ----- 1  build override rules -----------------------------------------
    let mut ob = OverrideBuilder::new(root);
    for dir in &cfg.scanner.excluded_directories {
        if let Err(e) = ob.add(&format!("!**/{dir}/**")) {
            tracing::warn!("cannot add ignore pattern ‘{dir}’: {e}");
        }
    }
    let overrides = ob
        .build()
        .map_err(|e| SaveNameError::Other(format!("invalid exclusion rules: {e}")))?;

    // ----- 2  channel & thread pool parameters -----------------------------
    let workers    = cfg.performance.worker_threads.unwrap_or_else(num_cpus::get).max(1);
    let batch_size = cfg.performance.batch_size.max(1);
    let (tx, rx)   = bounded::<Batch>(workers * cfg.performance.channel_multiplier.max(1));

    let root        = root.to_path_buf();
    let scan_hidden = cfg.scanner.scan_hidden_files;
    let follow      = cfg.scanner.follow_symlinks;
    let vcsignore   = cfg.scanner.read_vcsignore;
    let max_depth   = cfg.scanner.max_depth;

    tracing::debug!(?root, workers, %format, %case, "starting save directory walk");

    // ----- 3  the background walker thread ---------------------------------
    thread::spawn(move || {
        WalkBuilder::new(root)
          .hidden(!scan_hidden)
          .follow_links(follow)
          .git_ignore(vcsignore)
          .git_global(vcsignore)
          .git_exclude(vcsignore)
          .max_depth(max_depth)
          .threads(workers)
          .overrides(overrides)
          .build_parallel()
          .run(move || {
              let mut b = Batcher {
                  tx:    tx.clone(),
                  batch: Vec::with_capacity(batch_size),
                  limit: batch_size,
              };

              Box::new(move |entry| {
                  let entry = match entry {
                      Ok(e) if e.file_type().is_some_and(|ft| ft.is_file()) => e,
                      Ok(_) => return WalkState::Continue,
                      Err(e) => {
                          tracing::debug!("walk error: {e}");
                          return WalkState::Continue;
                      }
                  };

                  let Some(name) = entry.file_name().to_str() else {
                      tracing::debug!("skipping non UTF-8 name {:?}", entry.path());
                      return WalkState::Continue;
                  };

                  if !save::is_candidate_file_name(name, format, case) {
                      return WalkState::Continue;
                  }

                  tracing::trace!("sending {:?}", entry.path());
                  b.push(entry.into_path());
                  WalkState::Continue
              })
          });
    });

    Ok(rx)
}

#[cfg(test)]
fn collect(root: &Path, cfg: &Config, case: CaseSensitivity) -> Vec<PathBuf> {
    let rx = spawn_senders(root, cfg, SaveGameFormat::Serialization, case).unwrap();
    let mut out: Vec<PathBuf> = rx
        .into_iter()
        .flatten()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    out.sort();
    out
}

#[test]
fn walker_yields_only_save_candidates() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir(root.join("nested")).unwrap();
    for name in ["a.tsvg", "b.svg", "ctsvg.gz", "d.txt", "E.TSVG", "nested/f.tsvg"] {
        std::fs::write(root.join(name), b"").unwrap();
    }

    let cfg = Config::default();

    assert_eq!(
        collect(root, &cfg, CaseSensitivity::Sensitive),
        ["a.tsvg", "b.svg", "ctsvg.gz", "nested/f.tsvg"].map(PathBuf::from)
    );
    assert_eq!(
        collect(root, &cfg, CaseSensitivity::Insensitive),
        ["E.TSVG", "a.tsvg", "b.svg", "ctsvg.gz", "nested/f.tsvg"].map(PathBuf::from)
    );
}

#[test]
fn walker_honours_excluded_directories_and_depth() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("archive/deep")).unwrap();
    std::fs::create_dir(root.join("keep")).unwrap();
    std::fs::write(root.join("top.tsvg"), b"").unwrap();
    std::fs::write(root.join("archive/old.tsvg"), b"").unwrap();
    std::fs::write(root.join("keep/mid.tsvg"), b"").unwrap();

    let mut cfg = Config::default();
    cfg.scanner.excluded_directories.push("archive".into());
    cfg.performance.worker_threads = Some(2);
    cfg.performance.batch_size = 1;

    assert_eq!(
        collect(root, &cfg, CaseSensitivity::Sensitive),
        ["keep/mid.tsvg", "top.tsvg"].map(PathBuf::from)
    );

    cfg.scanner.max_depth = Some(1);
    assert_eq!(
        collect(root, &cfg, CaseSensitivity::Sensitive),
        [PathBuf::from("top.tsvg")]
    );
}

#[cfg(unix)]
#[test]
fn walker_skips_non_utf8_file_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::write(root.join(OsStr::from_bytes(b"bad\xff.tsvg")), b"").unwrap();
    std::fs::write(root.join("ok.tsvg"), b"").unwrap();

    for case in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
        assert_eq!(collect(root, &Config::default(), case), [PathBuf::from("ok.tsvg")]);
    }
}
