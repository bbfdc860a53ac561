use crate::errors::SaveNameResult;
use crate::save::{self, CaseSensitivity, SaveFileMatch, SaveGameFormat};
use console::style;

pub fn handle(names: &[String], format: SaveGameFormat, case: CaseSensitivity) -> SaveNameResult<()> {
    for name in names {
        let verdict = save::match_candidate(name, format, case);
        tracing::debug!(name = %name, ?verdict, "classified");

        match verdict {
            Some(m) => println!("{}  {}  ({})", style("SAVE").green().bold(), name, describe(m, format)),
            None => println!("{}  {}", style("----").dim(), name),
        }
    }
    Ok(())
}

fn describe(m: SaveFileMatch, format: SaveGameFormat) -> String {
    match m {
        SaveFileMatch::Primary => format!(".{} extension", format.extension()),
        SaveFileMatch::Legacy(ext) => format!("legacy .{ext} extension"),
        SaveFileMatch::MacOsAlternative => {
            format!("macOS compressed {} suffix", format.mac_os_alternative_extension())
        }
    }
}

#[test]
fn describe_names_the_matching_suffix() {
    let f = SaveGameFormat::Serialization;
    assert_eq!(describe(SaveFileMatch::Primary, f), ".tsvg extension");
    assert_eq!(describe(SaveFileMatch::Legacy("svg"), f), "legacy .svg extension");
    assert_eq!(describe(SaveFileMatch::MacOsAlternative, f), "macOS compressed tsvg.gz suffix");
}
