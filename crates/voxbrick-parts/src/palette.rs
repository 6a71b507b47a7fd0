use crate::error::ConfigError;
use crate::types::ColorId;

#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub id: ColorId,
    pub rgb: [u8; 3],
    pub name: String,
}

/// Fixed colour table; sampled colours snap to the nearest entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

/// Euclidean distance between two RGB triples.
#[inline]
pub fn color_distance(a: [u8; 3], b: [u8; 3]) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// Common LDraw colours, ascending by id.
    pub fn ldraw() -> Self {
        let table: [(u32, [u8; 3], &str); 11] = [
            (0, [27, 42, 52], "Black"),
            (1, [45, 87, 168], "Blue"),
            (2, [51, 150, 68], "Green"),
            (4, [200, 36, 40], "Red"),
            (14, [228, 203, 76], "Yellow"),
            (15, [254, 254, 254], "White"),
            (19, [180, 155, 114], "Tan"),
            (28, [211, 187, 142], "Flesh"),
            (71, [160, 165, 169], "Light Bluish Gray"),
            (72, [108, 110, 107], "Dark Bluish Gray"),
            (320, [170, 48, 48], "Dark Red"),
        ];
        Self {
            entries: table
                .iter()
                .map(|(id, rgb, name)| PaletteEntry {
                    id: ColorId(*id),
                    rgb: *rgb,
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Closest entry by RGB distance. Earlier entries win ties.
    pub fn nearest(&self, rgb: [u8; 3]) -> ColorId {
        let mut best = self.entries[0].id;
        let mut best_d = f32::INFINITY;
        for e in &self.entries {
            let d = color_distance(rgb, e.rgb);
            if d < best_d {
                best_d = d;
                best = e.id;
            }
        }
        best
    }

    pub fn get(&self, id: ColorId) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::ldraw()
    }
}
