//! Save-file naming rules.
//!
//! Everything in here is a pure function of its arguments: callers pass the
//! save format and the filesystem's case policy explicitly, and no file is
//! ever opened.

mod case;
mod format;
mod resolver;

pub use case::CaseSensitivity;
pub use format::SaveGameFormat;
pub use resolver::{
    SaveFileMatch, add_extension, add_extension_if_absent, is_candidate_file_name,
    match_candidate,
};
