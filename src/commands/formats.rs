use crate::errors::SaveNameResult;
use crate::save::SaveGameFormat;
use console::style;

pub fn handle(configured: SaveGameFormat) -> SaveNameResult<()> {
    println!("{}", style("Save formats").blue().bold().underlined());
    for line in format_lines(configured) {
        println!("{line}");
    }
    Ok(())
}

/// One block per format; the configured one is marked with `*`.
fn format_lines(configured: SaveGameFormat) -> Vec<String> {
    let mut lines = Vec::new();

    for format in SaveGameFormat::ALL {
        let marker = if format == configured { "*" } else { " " };
        lines.push(format!("{} {}", marker, style(format).white().bold()));
        lines.push(format!("    {:10} .{}", style("Primary"), format.extension()));

        let legacy = format.legacy_extensions();
        if legacy.is_empty() {
            lines.push(format!("    {:10} {}", style("Legacy"), style("none").dim()));
        } else {
            let list: Vec<String> = legacy.iter().map(|ext| format!(".{ext}")).collect();
            lines.push(format!("    {:10} {}", style("Legacy"), list.join(", ")));
        }
        lines.push(format!("    {:10} {}", style("macOS"), format.mac_os_alternative_extension()));
    }
    lines
}

#[test]
fn format_lines_mark_configured_format_and_list_suffixes() {
    let lines: Vec<String> = format_lines(SaveGameFormat::ProxySerialization)
        .iter()
        .map(|l| console::strip_ansi_codes(l).into_owned())
        .collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].trim_end(), "  serialization");
    assert!(lines[1].ends_with(".tsvg"));
    assert!(lines[2].trim_start().starts_with("Legacy") && lines[2].ends_with(".svg"));
    assert!(lines[3].ends_with("tsvg.gz"));

    assert_eq!(lines[4], "* proxy-serialization");
    assert!(lines[5].ends_with(".tsvgx"));
    assert!(lines[6].trim_start().starts_with("Legacy") && lines[6].ends_with("none"));
    assert!(lines[7].ends_with("tsvgx.gz"));
}
