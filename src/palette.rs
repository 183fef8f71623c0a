//! Keyword → color tables used to tokenize styled text.
//!
//! A [`ColorPalette`] maps keywords to colors (or to a reset marker that
//! restores the base color). [`ColorPalette::tokenize`] scans text left to
//! right, removes every keyword it finds and splits the remaining visible
//! text into [`ColoredSpan`]s at each marker boundary.
//!
//! Removing a marker can join its neighbours into a new keyword
//! (`"AB"` out of `"A<red>B"`). Scanning resumes far enough back to catch
//! such junctions, so the visible text never contains a registered keyword.
//! Every marker, junction or not, recolors from its position up to the next
//! surviving boundary.

use indexmap::IndexMap;

use crate::color::{Color, ColorError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by palette mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("keyword '{0}' is already in use")]
    DuplicateKeyword(String),
    #[error("keyword '{0}' is not in the color palette")]
    UnknownKeyword(String),
    #[error("palette keywords must not be empty")]
    EmptyKeyword,
    #[error("invalid color for keyword '{keyword}': {source}")]
    InvalidColor { keyword: String, source: ColorError },
}

// ---------------------------------------------------------------------------
// PaletteEntry / ColoredSpan
// ---------------------------------------------------------------------------

/// What a keyword switches the active color to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteEntry {
    Color(Color),
    /// Restore the base text color.
    Reset,
}

impl PaletteEntry {
    /// The color this entry selects, given the base text color.
    pub fn resolve(self, base: Color) -> Color {
        match self {
            PaletteEntry::Color(color) => color,
            PaletteEntry::Reset => base,
        }
    }
}

/// A run of visible text drawn in a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredSpan {
    pub text: String,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// Ordered mapping of keywords to colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    entries: IndexMap<String, PaletteEntry>,
}

impl ColorPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `keyword` as a switch to `color`.
    pub fn add_color(&mut self, keyword: &str, color: Color) -> Result<(), PaletteError> {
        self.insert(keyword, PaletteEntry::Color(color))
    }

    /// Register `keyword` with a hex color literal.
    pub fn add_color_str(&mut self, keyword: &str, hex: &str) -> Result<(), PaletteError> {
        let color = Color::from_hex(hex).map_err(|source| PaletteError::InvalidColor {
            keyword: keyword.to_owned(),
            source,
        })?;
        self.add_color(keyword, color)
    }

    /// Register `keyword` as a reset to the base text color.
    pub fn add_reset(&mut self, keyword: &str) -> Result<(), PaletteError> {
        self.insert(keyword, PaletteEntry::Reset)
    }

    fn insert(&mut self, keyword: &str, entry: PaletteEntry) -> Result<(), PaletteError> {
        if keyword.is_empty() {
            return Err(PaletteError::EmptyKeyword);
        }
        if self.entries.contains_key(keyword) {
            return Err(PaletteError::DuplicateKeyword(keyword.to_owned()));
        }
        self.entries.insert(keyword.to_owned(), entry);
        Ok(())
    }

    /// The entry registered for `keyword`.
    pub fn get(&self, keyword: &str) -> Result<PaletteEntry, PaletteError> {
        self.entries
            .get(keyword)
            .copied()
            .ok_or_else(|| PaletteError::UnknownKeyword(keyword.to_owned()))
    }

    /// Remove `keyword`, keeping the order of the remaining entries.
    pub fn remove(&mut self, keyword: &str) -> Result<PaletteEntry, PaletteError> {
        self.entries
            .shift_remove(keyword)
            .ok_or_else(|| PaletteError::UnknownKeyword(keyword.to_owned()))
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PaletteEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split `text` into colored spans, removing every keyword marker.
    ///
    /// Text before the first marker uses `base`. Empty spans are never
    /// produced, so plain text yields a single span and empty text none.
    pub fn tokenize(&self, text: &str, base: Color) -> Vec<ColoredSpan> {
        let glyphs = self.scan(text, base);
        let mut spans: Vec<ColoredSpan> = Vec::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            match spans.last_mut() {
                Some(span) if i > 0 && !glyph.boundary && span.color == glyph.color => {
                    span.text.push(glyph.ch);
                }
                _ => spans.push(ColoredSpan {
                    text: glyph.ch.to_string(),
                    color: glyph.color,
                }),
            }
        }
        spans
    }

    /// `text` with every keyword marker removed.
    pub fn strip_keywords(&self, text: &str) -> String {
        self.scan(text, Color::BLACK).into_iter().map(|g| g.ch).collect()
    }

    fn scan(&self, text: &str, base: Color) -> Vec<Glyph> {
        let mut glyphs: Vec<Glyph> = text
            .chars()
            .map(|ch| Glyph { ch, color: base, boundary: false })
            .collect();
        if self.entries.is_empty() {
            return glyphs;
        }
        let keywords: Vec<(Vec<char>, Color)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.chars().collect(), v.resolve(base)))
            .collect();
        let backtrack = keywords.iter().map(|(k, _)| k.len()).max().unwrap_or(1) - 1;

        let mut i = 0;
        while i < glyphs.len() {
            let Some((len, color)) = longest_match(&glyphs[i..], &keywords) else {
                i += 1;
                continue;
            };
            glyphs.drain(i..i + len);
            let end = glyphs[i..]
                .iter()
                .skip(1)
                .position(|g| g.boundary)
                .map_or(glyphs.len(), |p| i + 1 + p);
            for glyph in &mut glyphs[i..end] {
                glyph.color = color;
            }
            if let Some(glyph) = glyphs.get_mut(i) {
                glyph.boundary = true;
            }
            i = i.saturating_sub(backtrack);
        }
        glyphs
    }
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    ch: char,
    color: Color,
    boundary: bool,
}

fn longest_match(glyphs: &[Glyph], keywords: &[(Vec<char>, Color)]) -> Option<(usize, Color)> {
    keywords
        .iter()
        .filter(|(k, _)| k.len() <= glyphs.len() && k.iter().zip(glyphs).all(|(c, g)| *c == g.ch))
        .max_by_key(|(k, _)| k.len())
        .map(|(k, color)| (k.len(), *color))
}

// ===========================================================================
// Tests
// ===========================================================================
