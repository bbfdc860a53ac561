use super::{CaseSensitivity, SaveGameFormat};

/// Which recognised suffix made a file name a save candidate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SaveFileMatch {
    /// `<name>.<primary>`
    Primary,
    /// `<name>.<legacy>`, carrying the legacy extension that matched.
    Legacy(&'static str),
    /// `<name><primary>.gz`
    MacOsAlternative,
}

/// Append the format's extension, even if `file_name` already carries it.
pub fn add_extension(file_name: &str, format: SaveGameFormat) -> String {
    format!("{file_name}.{}", format.extension())
}

/// Append the format's extension unless `file_name` already ends with it.
///
/// Only the primary extension counts: a name ending in a legacy extension
/// still gets the primary one appended.
pub fn add_extension_if_absent(
    file_name: &str,
    format: SaveGameFormat,
    case: CaseSensitivity,
) -> String {
    if has_extension(file_name, format.extension(), case) {
        file_name.to_owned()
    } else {
        add_extension(file_name, format)
    }
}

/// Whether `file_name` looks like a save written in `format`, under any of its
/// primary, legacy or macOS-alternative suffixes.
pub fn is_candidate_file_name(file_name: &str, format: SaveGameFormat, case: CaseSensitivity) -> bool {
    match_candidate(file_name, format, case).is_some()
}

/// Tiers are tried in order: primary, legacy, macOS alternative.
pub fn match_candidate(
    file_name: &str,
    format: SaveGameFormat,
    case: CaseSensitivity,
) -> Option<SaveFileMatch> {
    if has_extension(file_name, format.extension(), case) {
        return Some(SaveFileMatch::Primary);
    }

    if let Some(legacy) = format
        .legacy_extensions()
        .iter()
        .find(|ext| has_extension(file_name, ext, case))
    {
        return Some(SaveFileMatch::Legacy(*legacy));
    }

    case.ends_with(file_name, format.mac_os_alternative_extension())
        .then_some(SaveFileMatch::MacOsAlternative)
}

fn has_extension(file_name: &str, extension: &str, case: CaseSensitivity) -> bool {
    case.ends_with(file_name, &format!(".{extension}"))
}

// ---------------------------------------------------------------------------
// add_extension
// ---------------------------------------------------------------------------

#[test]
fn add_extension_appends_when_absent() {
    assert_eq!(add_extension("file", SaveGameFormat::Serialization), "file.tsvg");
    assert_eq!(add_extension("file", SaveGameFormat::ProxySerialization), "file.tsvgx");
}

#[test]
fn add_extension_appends_even_when_present() {
    assert_eq!(add_extension("file.tsvg", SaveGameFormat::Serialization), "file.tsvg.tsvg");
    assert_eq!(
        add_extension("file.tsvgx", SaveGameFormat::ProxySerialization),
        "file.tsvgx.tsvgx"
    );
}

#[test]
fn add_extension_grows_by_dot_and_extension_and_is_not_idempotent() {
    for format in SaveGameFormat::ALL {
        for name in ["", "file", "file.tsvg", "My Save.SVG", "dir/with space"] {
            let once = add_extension(name, format);
            assert!(once.ends_with(&format!(".{}", format.extension())));
            assert_eq!(once.len(), name.len() + format.extension().len() + 1);

            let twice = add_extension(&once, format);
            assert_ne!(twice, once, "{name:?} / {format}");
        }
    }
}

#[test]
fn add_extension_keeps_empty_name_literal() {
    assert_eq!(add_extension("", SaveGameFormat::Serialization), ".tsvg");
}

// ---------------------------------------------------------------------------
// add_extension_if_absent
// ---------------------------------------------------------------------------

#[test]
fn add_extension_if_absent_on_case_sensitive_fs() {
    let cases = [
        (SaveGameFormat::Serialization, "file", "file.tsvg"),
        (SaveGameFormat::Serialization, "file.tsvg", "file.tsvg"),
        (SaveGameFormat::Serialization, "file.TSVG", "file.TSVG.tsvg"),
        (SaveGameFormat::ProxySerialization, "file", "file.tsvgx"),
        (SaveGameFormat::ProxySerialization, "file.tsvgx", "file.tsvgx"),
        (SaveGameFormat::ProxySerialization, "file.TSVGX", "file.TSVGX.tsvgx"),
    ];

    for (format, input, expected) in cases {
        assert_eq!(
            add_extension_if_absent(input, format, CaseSensitivity::Sensitive),
            expected,
            "case: {input} / {format}"
        );
    }
}

#[test]
fn add_extension_if_absent_on_case_insensitive_fs() {
    let cases = [
        (SaveGameFormat::Serialization, "file", "file.tsvg"),
        (SaveGameFormat::Serialization, "file.tsvg", "file.tsvg"),
        (SaveGameFormat::Serialization, "file.TSVG", "file.TSVG"),
        (SaveGameFormat::Serialization, "file.tSvG", "file.tSvG"),
        (SaveGameFormat::ProxySerialization, "file", "file.tsvgx"),
        (SaveGameFormat::ProxySerialization, "file.tsvgx", "file.tsvgx"),
        (SaveGameFormat::ProxySerialization, "file.TSVGX", "file.TSVGX"),
    ];

    for (format, input, expected) in cases {
        assert_eq!(
            add_extension_if_absent(input, format, CaseSensitivity::Insensitive),
            expected,
            "case: {input} / {format}"
        );
    }
}

#[test]
fn add_extension_if_absent_ignores_legacy_and_undotted_suffixes() {
    for case in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
        assert_eq!(
            add_extension_if_absent("file.svg", SaveGameFormat::Serialization, case),
            "file.svg.tsvg"
        );
        assert_eq!(
            add_extension_if_absent("filetsvg", SaveGameFormat::Serialization, case),
            "filetsvg.tsvg"
        );
        // `.tsvg` is not a suffix of `.tsvgx`, nor the other way round.
        assert_eq!(
            add_extension_if_absent("file.tsvgx", SaveGameFormat::Serialization, case),
            "file.tsvgx.tsvg"
        );
        assert_eq!(
            add_extension_if_absent("file.tsvg", SaveGameFormat::ProxySerialization, case),
            "file.tsvg.tsvgx"
        );
    }
}

#[test]
fn add_extension_if_absent_is_a_fixed_point_once_applied() {
    for format in SaveGameFormat::ALL {
        for case in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
            let once = add_extension_if_absent("autosave", format, case);
            assert_eq!(add_extension_if_absent(&once, format, case), once);
        }
    }
}

// ---------------------------------------------------------------------------
// is_candidate_file_name / match_candidate
// ---------------------------------------------------------------------------

#[test]
fn serialization_candidates_on_case_sensitive_fs() {
    let cases = [
        ("file", false),
        ("file.tsvg", true),
        ("file.TSVG", false),
        ("file.svg", true),
        ("file.SVG", false),
        ("filetsvg.gz", true),
        ("fileTSVG.GZ", false),
    ];

    for (name, expected) in cases {
        assert_eq!(
            is_candidate_file_name(name, SaveGameFormat::Serialization, CaseSensitivity::Sensitive),
            expected,
            "case: {name}"
        );
    }
}

#[test]
fn serialization_candidates_on_case_insensitive_fs() {
    let cases = [
        ("file", false),
        ("file.tsvg", true),
        ("file.TSVG", true),
        ("file.svg", true),
        ("file.SVG", true),
        ("filetsvg.gz", true),
        ("fileTSVG.GZ", true),
    ];

    for (name, expected) in cases {
        assert_eq!(
            is_candidate_file_name(name, SaveGameFormat::Serialization, CaseSensitivity::Insensitive),
            expected,
            "case: {name}"
        );
    }
}

#[test]
fn proxy_serialization_candidates() {
    let sensitive = [
        ("file", false),
        ("file.tsvgx", true),
        ("file.TSVGX", false),
        ("file.svg", false),
        ("filetsvgx.gz", true),
    ];
    for (name, expected) in sensitive {
        assert_eq!(
            is_candidate_file_name(name, SaveGameFormat::ProxySerialization, CaseSensitivity::Sensitive),
            expected,
            "case: {name}"
        );
    }

    let insensitive = [
        ("file", false),
        ("file.tsvgx", true),
        ("file.TSVGX", true),
        ("file.SVG", false),
    ];
    for (name, expected) in insensitive {
        assert_eq!(
            is_candidate_file_name(
                name,
                SaveGameFormat::ProxySerialization,
                CaseSensitivity::Insensitive
            ),
            expected,
            "case: {name}"
        );
    }
}

#[test]
fn empty_name_is_never_a_candidate() {
    for format in SaveGameFormat::ALL {
        for case in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
            assert!(!is_candidate_file_name("", format, case));
        }
    }
}

#[test]
fn match_candidate_reports_the_tier() {
    let f = SaveGameFormat::Serialization;
    let cs = CaseSensitivity::Sensitive;

    assert_eq!(match_candidate("file.tsvg", f, cs), Some(SaveFileMatch::Primary));
    assert_eq!(match_candidate("file.svg", f, cs), Some(SaveFileMatch::Legacy("svg")));
    assert_eq!(match_candidate("filetsvg.gz", f, cs), Some(SaveFileMatch::MacOsAlternative));
    assert_eq!(match_candidate("file.tsvg.gz", f, cs), Some(SaveFileMatch::MacOsAlternative));
    assert_eq!(match_candidate("file.gz", f, cs), None);
    assert_eq!(
        match_candidate("FILE.SVG", f, CaseSensitivity::Insensitive),
        Some(SaveFileMatch::Legacy("svg"))
    );
}
