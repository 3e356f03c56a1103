//! Rust source emission for the weighting table.
//!
//! The weighting table ships inside the runtime firmware as a plain constant
//! block: the two lookup scalars plus the sample array, cell 0 first. Values
//! are printed with shortest round-trip precision so the firmware sees
//! exactly the `f32` bits computed here.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::weighting::WeightingTable;

/// Samples printed per line in the emitted array.
const SAMPLES_PER_LINE: usize = 8;

/// Renders the table as a Rust module declaring `START`, `MULTIPLE`, and
/// `WEIGHTING`.
pub fn render_module(table: &WeightingTable) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "pub const START: f32 = {:?};", table.start() as f32);
    let _ = writeln!(out, "pub const MULTIPLE: f32 = {:?};", table.multiple() as f32);
    let _ = writeln!(out, "#[allow(clippy::excessive_precision)]");
    let _ = writeln!(out, "pub const WEIGHTING: [f32; {}] = [", table.len());
    for chunk in table.samples().chunks(SAMPLES_PER_LINE) {
        let line = chunk
            .iter()
            .map(|sample| format!("{sample:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "    {line},");
    }
    let _ = writeln!(out, "];");

    out
}

/// Renders the table and writes it to `path` in one shot.
///
/// # Errors
///
/// Returns [`Error::Io`] with the offending path when the write fails; no
/// partial file is left behind in that case.
pub fn write_module(table: &WeightingTable, path: &Path) -> Result<(), Error> {
    fs::write(path, render_module(table)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
