//! A JSON record of what a run emitted, so a workload can be regenerated or
//! cross-checked against the measurements taken from it.

use crate::error::Result;
use crate::rng::Flavor;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parameters that fully determine the token stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    Sequential,
    Random {
        seed: u32,
        flavor: Flavor,
        subset_size: usize,
        last: bool,
    },
}

/// Counts for one `# <length>` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub length: usize,
    pub inserts: usize,
    pub finds: usize,
    pub radius: usize,
    pub iterations: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub mode: Mode,
    pub blocks: Vec<BlockSummary>,
}

impl Manifest {
    pub fn total_finds(&self) -> usize {
        self.blocks.iter().map(|b| b.finds).sum()
    }

    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        serde_json::to_writer_pretty(out, self)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let manifest = Manifest {
            mode: Mode::Random {
                seed: 42,
                flavor: Flavor::Msvc,
                subset_size: 10,
                last: false,
            },
            blocks: vec![BlockSummary {
                length: 1000,
                inserts: 1000,
                finds: 10_000,
                radius: 10,
                iterations: 1000,
            }],
        };

        let mut out = Vec::new();
        manifest.write_to(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["mode"], "random");
        assert_eq!(value["seed"], 42);
        assert_eq!(value["flavor"], "msvc");
        assert_eq!(value["blocks"][0]["finds"], 10_000);

        let back: Manifest = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, manifest);
        assert_eq!(back.total_finds(), 10_000);
    }

    #[test]
    fn test_sequential_has_no_seed() {
        let manifest = Manifest { mode: Mode::Sequential, blocks: Vec::new() };
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["mode"], "sequential");
        assert!(value.get("seed").is_none());
    }
}
