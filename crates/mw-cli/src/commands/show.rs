use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(sheet_path: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(sheet_path)?;

    if sheet.themes.is_empty() {
        println!("  {} has no themes.", sheet.name);
        return Ok(());
    }

    println!("  {}", sheet.name.bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Theme", "Tag", "Kind"]);

    for theme in &sheet.themes {
        for tag in &theme.power_tags {
            table.add_row(vec![theme.name.as_str(), tag.as_str(), "power"]);
        }
        for tag in theme.weakness_tags.names() {
            table.add_row(vec![theme.name.as_str(), tag.as_str(), "weakness"]);
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} themes, {} power tags, {} weakness tags",
        sheet.themes.len(),
        sheet.power_tag_names().count(),
        sheet.weakness_tag_names().count()
    );

    Ok(())
}
