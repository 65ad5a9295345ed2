use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use image::Rgb;
use priority_queue::PriorityQueue;

#[cfg(feature = "print-truecolor")]
use termion::color;

/// Ranked colors, most frequent first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette of Colors
    pub palette: Vec<Color>,
}

/// Color with population
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Color {
    /// Color
    pub color: Rgb<u8>,
    /// Number of samples with exactly this color
    pub population: usize,
}

impl Color {
    /// Lowercase `#rrggbb` notation
    pub fn hex(&self) -> String {
        let [r, g, b] = self.color.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Palette {
    /// Number of ranked colors
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// True if no color was ranked
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Ranked colors, most frequent first
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.palette.iter()
    }

    /// Printable report listing this palette under a header naming `source`
    pub fn report<'a>(&'a self, source: &'a Path) -> Report<'a> {
        Report {
            source,
            palette: self,
            #[cfg(feature = "print-truecolor")]
            swatches: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    first_seen: usize,
    count: usize,
}

/// Occurrence count per exact color
///
/// Remembers when each color was first inserted so ranking can break ties by scan order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    tallies: HashMap<Rgb<u8>, Tally>,
    samples: usize,
}

impl FrequencyTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `color`
    pub fn insert(&mut self, color: Rgb<u8>) {
        let first_seen = self.samples;
        self.tallies
            .entry(color)
            .or_insert(Tally {
                first_seen,
                count: 0,
            })
            .count += 1;
        self.samples += 1;
    }

    /// Occurrences of `color` so far
    pub fn count_of(&self, color: &Rgb<u8>) -> usize {
        self.tallies.get(color).map(|t| t.count).unwrap_or(0)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    /// True if nothing was inserted
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Total number of inserted samples
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The `n` most frequent colors, in descending order of population
    ///
    /// Colors with equal population are ordered by their first insertion.
    pub fn top(&self, n: usize) -> Palette {
        let mut queue: PriorityQueue<Rgb<u8>, (usize, Reverse<usize>)> = self
            .tallies
            .iter()
            .map(|(&color, tally)| (color, (tally.count, Reverse(tally.first_seen))))
            .collect();

        let palette = std::iter::from_fn(|| queue.pop())
            .take(n)
            .map(|(color, (population, _))| Color { color, population })
            .collect();

        Palette { palette }
    }
}

impl FromIterator<Rgb<u8>> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Rgb<u8>>>(iter: T) -> Self {
        let mut table = Self::new();
        for color in iter {
            table.insert(color);
        }
        table
    }
}

/// Text report of a palette, one line per color under a header
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    source: &'a Path,
    palette: &'a Palette,
    #[cfg(feature = "print-truecolor")]
    swatches: bool,
}

#[cfg(feature = "print-truecolor")]
impl<'a> Report<'a> {
    /// Draw a true color swatch after each line. Only useful when writing to a terminal.
    pub fn with_swatches(self, swatches: bool) -> Self {
        Self { swatches, ..self }
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Most common colors in {}:", self.source.display())?;
        for c in self.palette.iter() {
            write!(f, "{}", c)?;
            #[cfg(feature = "print-truecolor")]
            if self.swatches {
                let [r, g, b] = c.color.0;
                write!(f, "\t{}███{}", color::Fg(color::Rgb(r, g, b)), color::Fg(color::Reset))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b] = self.color.0;
        write!(f, "RGB: ({}, {}, {}) - Hex: {}", r, g, b, self.hex())
    }
}
