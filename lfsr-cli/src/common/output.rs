use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use lfsr::{Sequence, SequenceConfig};
use serde_json::json;

use super::cli::Format;

pub fn write_sequence(
    w: &mut dyn Write,
    format: Format,
    config: &SequenceConfig,
    seq: &Sequence,
) -> Result<()> {
    match format {
        Format::Text => write_text(w, seq)?,
        Format::Json => write_json(w, config, seq)?,
    }
    w.flush()?;
    Ok(())
}

/// One decimal value per line, each followed by a trailing comma.
pub fn write_text(w: &mut dyn Write, seq: &Sequence) -> Result<()> {
    match seq {
        Sequence::Plain(states) => write_lines(w, states.as_slice())?,
        Sequence::Gold(chips) => write_lines(w, chips.as_slice())?,
    }
    Ok(())
}

// Streams straight from the generated buffer; sequences reach 2^32 - 1 elements.
fn write_lines<T: Display>(w: &mut dyn Write, values: &[T]) -> Result<()> {
    for v in values {
        writeln!(w, "{},", v)?;
    }
    Ok(())
}

pub fn write_json(w: &mut dyn Write, config: &SequenceConfig, seq: &Sequence) -> Result<()> {
    let report = json!({
        "config": config,
        "length": seq.len(),
        "sequence": seq,
    });
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text() {
        let mut buf = Vec::new();
        write_text(&mut buf, &Sequence::Plain(vec![1, 9, 13])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,\n9,\n13,\n");
    }

    #[test]
    fn test_write_text_gold() {
        let mut buf = Vec::new();
        write_text(&mut buf, &Sequence::Gold(vec![0, 1, 1])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0,\n1,\n1,\n");
    }

    #[test]
    fn test_write_text_full_word() {
        let mut buf = Vec::new();
        write_text(&mut buf, &Sequence::Plain(vec![u32::MAX, 0x8000_0000])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4294967295,\n2147483648,\n");
    }

    #[test]
    fn test_write_text_matches_generated_sequence() {
        let seq = lfsr::generate(&SequenceConfig::plain(8, 0xB8, 0x1)).unwrap();
        let mut buf = Vec::new();
        write_text(&mut buf, &seq).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed: Vec<u64> = text
            .lines()
            .map(|l| l.trim_end_matches(',').parse().unwrap())
            .collect();
        assert_eq!(parsed.len(), 255);
        assert_eq!(parsed, seq.values().collect::<Vec<u64>>());
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        let config = SequenceConfig::plain(2, 0x3, 0x1);
        write_sequence(&mut buf, Format::Json, &config, &Sequence::Plain(vec![1, 3, 2])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["length"], 3);
        assert_eq!(value["sequence"], json!([1, 3, 2]));
        assert_eq!(value["config"]["mode"], "plain");
        assert_eq!(value["config"]["taps"], 3);
    }
}
