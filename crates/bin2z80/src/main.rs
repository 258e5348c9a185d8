//! Convert a raw memory dump into a ZX Spectrum 128K .Z80 snapshot.
//!
//! The dump is loaded into a 48K RAM image at its dump address and written
//! out as an uncompressed version 2 snapshot that resumes at the run
//! address.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use format_z80::Snapshot;
use log::info;

mod address;

use address::parse_address;

#[derive(Parser, Debug)]
#[command(name = "bin2z80", version, about = "Convert a raw memory dump into a .Z80 snapshot")]
struct Cli {
    /// Raw memory dump to load
    bin_file: PathBuf,
    /// Snapshot to write (created or truncated)
    output_file: PathBuf,
    /// Address the dump is loaded at, $4000-$FFFF (decimal, 0x or $ hex)
    #[arg(value_parser = parse_address)]
    dump_address: u16,
    /// Address execution resumes at (decimal, 0x or $ hex)
    #[arg(value_parser = parse_address)]
    run_address: u16,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let image = fs::read(&cli.bin_file)
        .with_context(|| format!("can't open file {}", cli.bin_file.display()))?;

    let snapshot = Snapshot::new(cli.dump_address, cli.run_address, &image)
        .with_context(|| format!("can't place {}", cli.bin_file.display()))?;

    let file = create_output(&cli.output_file)
        .with_context(|| format!("can't open file {}", cli.output_file.display()))?;
    let mut out = BufWriter::new(file);
    snapshot
        .write_to(&mut out)
        .with_context(|| format!("can't write {}", cli.output_file.display()))?;
    out.flush()
        .with_context(|| format!("can't write {}", cli.output_file.display()))?;

    info!(
        "{}: {} bytes at ${:04X}, run ${:04X} -> {}",
        cli.bin_file.display(),
        image.len(),
        cli.dump_address,
        cli.run_address,
        cli.output_file.display()
    );
    Ok(())
}

/// Create or truncate the output, readable and writable by the owner only.
fn create_output(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
