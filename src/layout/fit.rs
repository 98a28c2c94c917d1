use std::collections::HashMap;

use crate::foundation::error::{FrameloomError, FrameloomResult};

/// Font-metric approximations for the fitting heuristic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitOptions {
    /// Average glyph width as a fraction of the font size.
    pub char_aspect: f64,
    /// Line box height as a multiple of the font size.
    pub line_height: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            char_aspect: 0.55,
            line_height: 1.2,
            min_size: 16.0,
            max_size: 75.0,
        }
    }
}

impl FitOptions {
    pub fn with_max_size(size: f64) -> Self {
        Self {
            max_size: size,
            ..Self::default()
        }
    }
}

/// Output of the fitting heuristic. `width`/`height` are the estimated
/// occupied block dimensions at the chosen size, not exact shaping metrics.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

/// Pick a font size that fills the container area without letting the
/// longest word overflow horizontally.
///
/// Two candidate sizes are solved and the smaller wins:
/// - area fill: `area = chars * size^2 * char_aspect * line_height`,
///   solved for `size`;
/// - width limit: the longest word rendered at `size` must fit `max_width`.
///
/// The result is clamped to `[min_size, max_size]`. This is a heuristic,
/// not text shaping: overflow beyond the estimate is cosmetic risk the
/// caller accepts, not a correctness bug. Empty text resolves to
/// `max_size`; non-positive container bounds are an error.
pub fn fit_text(
    text: &str,
    max_width: f64,
    max_height: f64,
    opts: &FitOptions,
) -> FrameloomResult<LayoutResult> {
    if !(max_width > 0.0) || !(max_height > 0.0) {
        return Err(FrameloomError::layout_bounds(format!(
            "container must be positive, got {max_width}x{max_height}"
        )));
    }

    let char_count = text.chars().filter(|c| !c.is_whitespace()).count();
    if char_count == 0 {
        return Ok(LayoutResult {
            font_size: opts.max_size,
            width: 0.0,
            height: 0.0,
        });
    }

    let longest_word_chars = text
        .split_whitespace()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(1)
        .max(1);

    let area_per_char = opts.char_aspect * opts.line_height;
    let area_size = ((max_width * max_height) / (char_count as f64 * area_per_char)).sqrt();
    let width_size = max_width / (longest_word_chars as f64 * opts.char_aspect);

    let font_size = area_size.min(width_size).clamp(opts.min_size, opts.max_size);

    // Estimated occupied block at that size.
    let chars_per_line = ((max_width / (font_size * opts.char_aspect)).floor()).max(1.0);
    let lines = ((char_count as f64) / chars_per_line).ceil().max(1.0);
    let width = if lines > 1.0 {
        max_width
    } else {
        (char_count as f64) * font_size * opts.char_aspect
    };
    let height = lines * font_size * opts.line_height;

    Ok(LayoutResult {
        font_size,
        width,
        height,
    })
}

/// Memoization over `fit_text`, keyed on the exact input tuple. The solver
/// itself stays pure; this just avoids recomputing the same fit for every
/// frame of an element's lifetime.
#[derive(Debug, Default)]
pub struct FitCache {
    entries: HashMap<FitKey, LayoutResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FitKey {
    text: String,
    max_width_bits: u64,
    max_height_bits: u64,
    char_aspect_bits: u64,
    line_height_bits: u64,
    min_size_bits: u64,
    max_size_bits: u64,
}

impl FitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(
        &mut self,
        text: &str,
        max_width: f64,
        max_height: f64,
        opts: &FitOptions,
    ) -> FrameloomResult<LayoutResult> {
        let key = FitKey {
            text: text.to_string(),
            max_width_bits: max_width.to_bits(),
            max_height_bits: max_height.to_bits(),
            char_aspect_bits: opts.char_aspect.to_bits(),
            line_height_bits: opts.line_height.to_bits(),
            min_size_bits: opts.min_size.to_bits(),
            max_size_bits: opts.max_size.to_bits(),
        };
        if let Some(hit) = self.entries.get(&key) {
            return Ok(*hit);
        }
        let result = fit_text(text, max_width, max_height, opts)?;
        self.entries.insert(key, result);
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
