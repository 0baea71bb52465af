// File: crates/demo/src/main.rs
// Summary: Demo stands in for the UI layer: takes a square index, prints the
// text panel, and writes board/growth/cumulative CSVs for an external plotter.

use anyhow::{Context, Result};
use grains_core::{grain_pairs, total_pairs, BoardSnapshot};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept the square from CLI or fall back to the full board.
    let square = match std::env::args().nth(1) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("not a square index: '{raw}'"))?,
        None => 64,
    };

    let snap = BoardSnapshot::at(square)?;

    println!("Square {}", snap.stats.square_label);
    println!(
        "Grains on this square: {} ({})",
        snap.stats.grains_compact, snap.stats.grains_exact
    );
    println!(
        "Total grains so far:   {} ({})",
        snap.stats.total_compact, snap.stats.total_exact
    );
    println!("{}", snap.stats.context);
    if let Some(milestone) = &snap.stats.milestone {
        println!("{milestone}");
    }

    println!();
    println!("Against real-world quantities, the total:");
    for c in &snap.comparisons {
        println!("  {}", c.summary());
    }
    println!();

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("creating target/out")?;

    write_board_csv(&out_dir.join("board.csv"), &snap)?;
    write_pairs_csv(
        &out_dir.join("growth.csv"),
        ["square", "grains"],
        &grain_pairs(snap.square),
    )?;
    write_pairs_csv(
        &out_dir.join("cumulative.csv"),
        ["square", "total"],
        &total_pairs(snap.square),
    )?;

    Ok(())
}

/// Heatmap cells in raster order, one row per cell.
fn write_board_csv(path: &Path, snap: &BoardSnapshot) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    w.write_record(["row", "col", "square", "grains", "intensity"])?;
    for cell in &snap.board {
        w.write_record([
            cell.row.to_string(),
            cell.col.to_string(),
            cell.square.to_string(),
            cell.grains.to_string(),
            format!("{:.6}", cell.intensity),
        ])?;
    }
    w.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Exact (square, value) pairs; values are written as full decimals so the
/// export stays exact where the f64 chart points are not.
fn write_pairs_csv(path: &Path, header: [&str; 2], pairs: &[(u32, u128)]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    w.write_record(header)?;
    for &(square, value) in pairs {
        w.write_record([square.to_string(), value.to_string()])?;
    }
    w.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}
