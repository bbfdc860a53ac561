use crate::errors::SaveNameError;
use std::fmt;
use std::str::FromStr;

/// Whether the hosting filesystem tells apart names that differ only in case.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// `text.ends_with(suffix)` under this policy.
    ///
    /// Insensitive matching walks both strings backwards one `char` at a time,
    /// so `text` is never lowercased or copied.
    pub fn ends_with(self, text: &str, suffix: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => text.ends_with(suffix),
            CaseSensitivity::Insensitive => {
                let mut tail = text.chars().rev();
                suffix
                    .chars()
                    .rev()
                    .all(|s| tail.next().is_some_and(|t| chars_eq_ignore_case(t, s)))
            }
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b
        || a.to_uppercase().eq(b.to_uppercase())
        || a.to_lowercase().eq(b.to_lowercase())
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaseSensitivity::Sensitive => "sensitive",
            CaseSensitivity::Insensitive => "insensitive",
        })
    }
}

impl FromStr for CaseSensitivity {
    type Err = SaveNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "sensitive" => Ok(CaseSensitivity::Sensitive),
            "insensitive" => Ok(CaseSensitivity::Insensitive),
            _ => Err(SaveNameError::UnknownCaseSensitivity(input.to_owned())),
        }
    }
}

#[test]
fn sensitive_suffix_requires_exact_case() {
    let cs = CaseSensitivity::Sensitive;
    assert!(cs.ends_with("file.tsvg", ".tsvg"));
    assert!(!cs.ends_with("file.TSVG", ".tsvg"));
    assert!(!cs.ends_with("tsvg", ".tsvg"));
}

#[test]
fn insensitive_suffix_ignores_case() {
    let cases = [
        ("file.tsvg", ".tsvg", true),
        ("file.TSVG", ".tsvg", true),
        ("file.TsVg", ".tSvG", true),
        ("fileTSVG.GZ", "tsvg.gz", true),
        ("tsvg", ".tsvg", false),
        ("file.tsvgx", ".tsvg", false),
        ("", "", true),
        ("", ".tsvg", false),
        ("ÄRGER.TSVG", "ärger.tsvg", true),
    ];

    for (text, suffix, expected) in cases {
        assert_eq!(
            CaseSensitivity::Insensitive.ends_with(text, suffix),
            expected,
            "case: {text:?} ends with {suffix:?}"
        );
    }
}

#[test]
fn case_sensitivity_parses_its_own_display() {
    for cs in [CaseSensitivity::Sensitive, CaseSensitivity::Insensitive] {
        assert_eq!(cs.to_string().parse::<CaseSensitivity>().unwrap(), cs);
    }
    assert_eq!("INSENSITIVE".parse::<CaseSensitivity>().unwrap(), CaseSensitivity::Insensitive);
    assert!("auto".parse::<CaseSensitivity>().is_err());
}
