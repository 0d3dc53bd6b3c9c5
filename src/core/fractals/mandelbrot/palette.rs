use thiserror::Error;

use crate::core::data::colour::Colour;

pub const PALETTE_SIZE: usize = 256;

/// Marker loop of the default gradient. First and last entries match so the
/// palette cycles without a seam.
pub const DEFAULT_MARKERS: [u32; 10] = [
    0x0AFC84, 0x3264F0, 0xE63C14, 0xE6AA00, 0xAFAF0A, 0x5A0032, 0xB45A78, 0xFF1428, 0x1E46C8,
    0x0AFC84,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette needs at least 2 marker colours, got {count}")]
    TooFewMarkers { count: usize },
}

/// Cyclic colour table indexed modulo [`PALETTE_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Colour; PALETTE_SIZE],
}

impl Palette {
    /// Spreads `markers` evenly over the table and fills each segment with a
    /// per-channel linear gradient.
    ///
    /// Channel values and table positions are floored, never rounded. A
    /// segment's last slot is overwritten by the first slot of the next one.
    pub fn from_markers(markers: &[Colour]) -> Result<Self, PaletteError> {
        if markers.len() < 2 {
            return Err(PaletteError::TooFewMarkers {
                count: markers.len(),
            });
        }

        let mut entries = [Colour::BLACK; PALETTE_SIZE];
        let segment_length = PALETTE_SIZE as f64 / (markers.len() - 1) as f64;

        for (segment, pair) in markers.windows(2).enumerate() {
            let start = channels(pair[0]);
            let end = channels(pair[1]);
            let delta = [
                (end[0] - start[0]) / segment_length,
                (end[1] - start[1]) / segment_length,
                (end[2] - start[2]) / segment_length,
            ];
            let segment_start = segment as f64 * segment_length;

            let mut current = start;
            let mut offset = 0.0;
            while offset < segment_length {
                let index = (segment_start + offset).floor() as usize;
                if let Some(entry) = entries.get_mut(index) {
                    *entry = Colour {
                        r: clamp_channel(current[0]),
                        g: clamp_channel(current[1]),
                        b: clamp_channel(current[2]),
                    };
                }

                for (value, step) in current.iter_mut().zip(delta) {
                    *value += step;
                }
                offset += 1.0;
            }
        }

        Ok(Self { entries })
    }

    /// Builds the palette from packed `0xRRGGBB` markers.
    pub fn from_rgb_markers(markers: &[u32]) -> Result<Self, PaletteError> {
        let colours: Vec<Colour> = markers.iter().copied().map(Colour::from_rgb_hex).collect();

        Self::from_markers(&colours)
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour; PALETTE_SIZE] {
        &self.entries
    }

    /// Entry at `index`, wrapping in both directions.
    #[must_use]
    pub fn get(&self, index: i64) -> Colour {
        self.entries[index.rem_euclid(PALETTE_SIZE as i64) as usize]
    }

    /// Colour at a fractional palette position, blending the two neighbouring
    /// entries channel by channel.
    #[must_use]
    pub fn smooth_colour(&self, position: f64) -> Colour {
        let floor = position.floor();
        let fraction = position - floor;
        let index = floor as i64;

        let from = self.get(index);
        let to = self.get(index.wrapping_add(1));

        Colour {
            r: lerp_channel(from.r, to.r, fraction),
            g: lerp_channel(from.g, to.g, fraction),
            b: lerp_channel(from.b, to.b, fraction),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = DEFAULT_MARKERS.map(Colour::from_rgb_hex);

        Self::from_markers(&entries).expect("default palette has more than one marker")
    }
}

fn channels(colour: Colour) -> [f64; 3] {
    [f64::from(colour.r), f64::from(colour.g), f64::from(colour.b)]
}

fn clamp_channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

fn lerp_channel(from: u8, to: u8, fraction: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);

    (from + (to - from) * fraction) as u8
}
