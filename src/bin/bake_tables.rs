//! Bakes every table artifact the runtime consumes: the amplitude-weighting
//! module and the two wavetable banks. No arguments; all tunables are
//! compile-time constants below.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wavebake::bank::{self, BankConfig};
use wavebake::emit::table;
use wavebake::mapping::LogIndexMap;
use wavebake::weighting::{self, WeightingTable};

const WEIGHTING_MODULE: &str = "generated/weighting.rs";
const WEIGHTING_START: f64 = 9.0;
const WEIGHTING_MULTIPLE: f64 = 236.0;
const WEIGHTING_CELLS: usize = 1016;

const BANK_DIR: &str = "generated/banks";
const WAVETABLE_SIZE: usize = 600;
const HEADROOM: f32 = 0.9;

fn main() -> Result<()> {
    bake_weighting()?;
    bake_banks()?;
    Ok(())
}

fn bake_weighting() -> Result<()> {
    let curve = weighting::equal_loudness()?;
    let map = LogIndexMap::new(WEIGHTING_START, WEIGHTING_MULTIPLE, WEIGHTING_CELLS)?;
    let table = WeightingTable::build(&curve, &map);

    let module = Path::new(WEIGHTING_MODULE);
    if let Some(parent) = module.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    table::write_module(&table, module)?;

    println!("wrote {WEIGHTING_MODULE} ({} cells)", table.len());
    Ok(())
}

fn bake_banks() -> Result<()> {
    let config = BankConfig {
        table_size: WAVETABLE_SIZE,
        headroom: HEADROOM,
        output_dir: PathBuf::from(BANK_DIR),
    };

    let written = bank::generate(&config).context("wavetable bank generation failed")?;
    for path in &written {
        println!("wrote {}", path.display());
    }
    println!("{} wavetables in {BANK_DIR}", written.len());
    Ok(())
}
