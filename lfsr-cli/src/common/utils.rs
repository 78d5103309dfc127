use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

pub fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

/// Parses a hexadecimal register value, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{}': {}", s, e))
}

/// Opens the output sink: stdout when `path` is empty, else a fresh file.
pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path.is_empty() {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }
    }
    debug!("Writing sequence to {}", path);
    let file = File::create(path).with_context(|| format!("cannot create {}", path))?;
    Ok(Box::new(BufWriter::new(file)))
}
