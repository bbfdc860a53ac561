use crate::errors::SaveNameResult;
use crate::save::{self, CaseSensitivity, SaveGameFormat};

pub fn handle(name: &str, force: bool, format: SaveGameFormat, case: CaseSensitivity) -> SaveNameResult<()> {
    println!("{}", file_name_for(name, force, format, case));
    Ok(())
}

fn file_name_for(name: &str, force: bool, format: SaveGameFormat, case: CaseSensitivity) -> String {
    if force {
        save::add_extension(name, format)
    } else {
        save::add_extension_if_absent(name, format, case)
    }
}

#[test]
fn force_always_appends() {
    let f = SaveGameFormat::ProxySerialization;
    let cs = CaseSensitivity::Sensitive;

    assert_eq!(file_name_for("file", false, f, cs), "file.tsvgx");
    assert_eq!(file_name_for("file.tsvgx", false, f, cs), "file.tsvgx");
    assert_eq!(file_name_for("file.TSVGX", false, f, cs), "file.TSVGX.tsvgx");
    assert_eq!(file_name_for("file.tsvgx", true, f, cs), "file.tsvgx.tsvgx");
}
