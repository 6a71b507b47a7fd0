use std::fs;
use std::path::Path;

use voxbrick_geom::{Mat3, Vec3};
use voxbrick_parts::ColorId;

use crate::error::LdrawError;

/// A part reference read back from a model file.
#[derive(Clone, Debug, PartialEq)]
pub struct PartRef {
    pub color: ColorId,
    pub position: Vec3,
    pub orientation: Mat3,
    pub part: String,
}

/// Parse the type-1 lines of an LDraw model. Comments, other line types, and
/// malformed lines (including non-finite numbers) are skipped.
pub fn parse_ldr(text: &str) -> Vec<PartRef> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"1") {
            continue;
        }
        match parse_part_line(&fields) {
            Some(p) => out.push(p),
            None => log::debug!("skipping malformed part line {}: {}", lineno + 1, line),
        }
    }
    out
}

fn parse_part_line(fields: &[&str]) -> Option<PartRef> {
    if fields.len() < 15 {
        return None;
    }
    let color = fields[1].parse::<u32>().ok()?;
    let mut nums = [0.0f32; 12];
    for (i, n) in nums.iter_mut().enumerate() {
        *n = fields[2 + i].parse::<f32>().ok().filter(|v| v.is_finite())?;
    }
    let mut m = [0.0f32; 9];
    m.copy_from_slice(&nums[3..]);
    Some(PartRef {
        color: ColorId(color),
        position: Vec3::new(nums[0], nums[1], nums[2]),
        orientation: Mat3 { m },
        // Part names may contain spaces.
        part: fields[14..].join(" "),
    })
}

pub fn read_ldr(path: impl AsRef<Path>) -> Result<Vec<PartRef>, LdrawError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_ldr(&text))
}
