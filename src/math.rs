//! Colour-stop math: blending, text segmentation, hue rotation and
//! quantization.
//!
//! Everything here is pure. Text is measured in `char`s, never bytes, so
//! segment boundaries always fall on character boundaries.

use palette::{Hsv, IntoColor, Srgb};

use crate::types::{Colour, LegacyPalette, PaletteEntry};

/// Linear per-channel blend. `t = 0.0` gives `a`, `t = 1.0` gives `b`.
pub fn interpolate(a: Colour, b: Colour, t: f32) -> Colour {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;

    Colour::rgb(
        ((a.r as f32 * inv) + (b.r as f32 * t)).round() as u8,
        ((a.g as f32 * inv) + (b.g as f32 * t)).round() as u8,
        ((a.b as f32 * inv) + (b.b as f32 * t)).round() as u8,
    )
}

/// Lengths of `parts` balanced pieces of a `len`-character text.
///
/// Each piece takes the ceiling of the remaining length over the remaining
/// pieces, so lengths are non-increasing and differ by at most one.
/// Fewer than two parts yields a single piece.
pub fn segment_sizes(len: usize, parts: usize) -> Vec<usize> {
    if parts < 2 {
        return vec![len];
    }

    let mut sizes = Vec::with_capacity(parts);
    let mut remaining = len;
    for left in (1..=parts).rev() {
        let size = remaining.div_ceil(left);
        sizes.push(size);
        remaining -= size;
    }
    sizes
}

/// Split `text` into `parts` contiguous pieces per [`segment_sizes`].
pub fn segment(text: &str, parts: usize) -> Vec<&str> {
    let sizes = segment_sizes(text.chars().count(), parts);
    let mut pieces = Vec::with_capacity(sizes.len());
    let mut rest = text;

    for size in sizes {
        let split = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(idx, _)| idx);
        let (piece, tail) = rest.split_at(split);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}

/// One colour per character across `stops`.
///
/// The characters are segmented into `stops.len() - 1` pieces and piece
/// `i` blends from stop `i` toward stop `i + 1`. Every piece but the last
/// stops one step short of its end stop, which the next piece opens on,
/// so a joining stop colours exactly one character. The last piece lands
/// on the final stop. Returns an empty vec for fewer than two stops.
pub fn gradient(stops: &[Colour], len: usize) -> Vec<Colour> {
    if stops.len() < 2 {
        return Vec::new();
    }

    let sizes = segment_sizes(len, stops.len() - 1);
    let last = sizes.len() - 1;
    let mut colours = Vec::with_capacity(len);

    for (i, &size) in sizes.iter().enumerate() {
        let (from, to) = (stops[i], stops[i + 1]);
        let steps = if i == last { size.saturating_sub(1) } else { size };

        for j in 0..size {
            let t = if steps == 0 { 0.0 } else { j as f32 / steps as f32 };
            colours.push(interpolate(from, to, t));
        }
    }
    colours
}

/// One colour per position, rotating hue once around the wheel.
///
/// Value is fixed at full brightness; `saturation` is clamped to
/// `0.0..=1.0`. A single position samples hue 0.
pub fn rainbow(len: usize, saturation: f32) -> Vec<Colour> {
    let saturation = saturation.clamp(0.0, 1.0);
    let step = if len == 0 { 0.0 } else { 360.0 / len as f32 };

    (0..len)
        .map(|i| {
            let hsv = Hsv::new(i as f32 * step, saturation, 1.0);
            let rgb: Srgb<f32> = hsv.into_color();
            Colour::rgb(
                (rgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
                (rgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
                (rgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            )
        })
        .collect()
}

/// The palette entry nearest to `colour`.
pub fn nearest_legacy(palette: &LegacyPalette, colour: Colour) -> &PaletteEntry {
    palette.nearest(colour)
}
