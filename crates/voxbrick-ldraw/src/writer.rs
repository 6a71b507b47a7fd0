use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use voxbrick_merge::Placement;

use crate::error::LdrawError;

/// Shortest decimal form of a coordinate; `-0` prints as `0`.
pub fn format_number(v: f32) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

/// One LDraw type-1 line: `1 <colour> <x> <y> <z> <a b c d e f g h i> <part>`.
pub fn format_placement(p: &Placement) -> String {
    let mut line = format!(
        "1 {} {} {} {}",
        p.color,
        format_number(p.position.x),
        format_number(p.position.y),
        format_number(p.position.z)
    );
    for m in p.orientation.m {
        line.push(' ');
        line.push_str(&format_number(m));
    }
    line.push(' ');
    line.push_str(&p.part);
    line
}

pub struct LdrawWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> LdrawWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Comment header naming the model.
    pub fn header(&mut self, title: &str, name: &str) -> std::io::Result<()> {
        writeln!(self.out, "0 {}", title)?;
        writeln!(self.out, "0 Name: {}", name)
    }

    pub fn placement(&mut self, p: &Placement) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_placement(p))?;
        self.written += 1;
        Ok(())
    }

    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write a complete model file; returns the number of part lines.
pub fn write_model(
    path: impl AsRef<Path>,
    title: &str,
    placements: &[Placement],
) -> Result<usize, LdrawError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut w = LdrawWriter::new(BufWriter::new(File::create(path)?));
    w.header(title, &name)?;
    for p in placements {
        w.placement(p)?;
    }
    let count = w.written();
    w.finish()?;
    log::info!("wrote {} parts to {:?}", count, path);
    Ok(count)
}
