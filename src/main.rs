use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use pwa_icon_gen::constants::output;
use pwa_icon_gen::render::{write_icon, ICON_SET};

fn main() -> Result<()> {
    println!("Generating icon set...");

    let out_dir = Path::new(output::DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for spec in &ICON_SET {
        println!(
            "  Creating {} ({}x{})...",
            spec.output_name, spec.edge_length, spec.edge_length
        );
        write_icon(spec, out_dir)?;
    }

    println!("✅ Created {} icons in {}/", ICON_SET.len(), output::DIR);

    Ok(())
}
