use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use hideseek_domain::{default_house, House};
use hideseek_engine::entities::HouseLoader;
use hideseek_engine::infrastructure::file_storage::FileStorage;

const HOUSE_SUFFIX: &str = ".house.json";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let command = args.next();
    let dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    match command.as_deref() {
        Some("validate-houses") => validate_houses(&dir),
        Some("export-default-house") => export_default_house(&dir),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command> [dir]\n\nCommands:\n  validate-houses\n  export-default-house"
        ),
    }
}

/// Load every `*.house.json` layout in `dir` and report what is wrong with it.
fn validate_houses(dir: &Path) -> anyhow::Result<()> {
    let loader = HouseLoader::new(Arc::new(FileStorage::new(dir)));
    let mut sources = BTreeSet::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let file_name = entry?.file_name();
        if let Some(source) = file_name.to_string_lossy().strip_suffix(HOUSE_SUFFIX) {
            sources.insert(source.to_string());
        }
    }

    let mut failures = 0usize;
    for source in &sources {
        match loader.load(source) {
            Ok(house) => {
                let unreachable = unreachable_hiding_locations(&house);
                if unreachable.is_empty() {
                    println!(
                        "ok    {source}: {} locations, {} hiding",
                        house.locations().len(),
                        house.hiding_locations().count()
                    );
                } else {
                    failures += 1;
                    println!(
                        "FAIL  {source}: unreachable from the entry: {}",
                        unreachable.join(", ")
                    );
                }
            }
            Err(err) => {
                failures += 1;
                println!("FAIL  {source}: {err}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} house layouts failed validation", sources.len());
    }
    println!("{} house layouts valid", sources.len());
    Ok(())
}

/// Hiding locations a random walk from the entry can never reach.
fn unreachable_hiding_locations(house: &House) -> Vec<String> {
    let mut seen = vec![false; house.locations().len()];
    let mut queue = VecDeque::from([house.entry()]);
    seen[house.entry().index()] = true;
    while let Some(id) = queue.pop_front() {
        for (_, to) in house.exits_of(id) {
            if !seen[to.index()] {
                seen[to.index()] = true;
                queue.push_back(to);
            }
        }
    }

    house
        .hiding_locations()
        .filter(|location| !seen[location.id().index()])
        .map(|location| location.name().to_string())
        .collect()
}

/// Write the built-in house as an editable layout file.
fn export_default_house(dir: &Path) -> anyhow::Result<()> {
    let house = default_house()?;
    HouseLoader::new(Arc::new(FileStorage::new(dir)))
        .save(&house)
        .context("exporting the default house")?;
    println!(
        "Wrote {}{HOUSE_SUFFIX} to {}",
        house.source_name(),
        dir.display()
    );
    Ok(())
}
