//! Convert a height raster into a tangent-space normal map.
//!
//! Height is read from the red channel of the source raster (`R / 255`), so
//! an albedo map can serve directly as a pseudo-height field.  The gradient
//! at each texel is a central difference of its four neighbours, fetched
//! toroidally: column `-1` aliases column `width - 1` and row `-1` aliases
//! row `height - 1`, so the derived map tiles without a seam.
//!
//! Encoding, with `dx = (left − right)·strength` and
//! `dy = (above − below)·strength`:
//!   R = dx·0.5 + 0.5
//!   G = dy·0.5 + 0.5
//!   B = 1   (outward; see [`NormalEncoding`] for the normalized variant)
//!   A = 255

use crate::{config::NormalEncoding, generator::Raster};

/// Derive a normal map from the red channel of `source`.
///
/// The output has the same dimensions as the input.
pub fn height_to_normal(source: &Raster, strength: f64, encoding: NormalEncoding) -> Raster {
    let w = source.width();
    let h = source.height();
    if w == 0 || h == 0 {
        return Raster::from_fn(w, h, |_, _| [0; 4]);
    }
    let height_at = |x: u32, y: u32| source.texel(x, y)[0] as f64 / 255.0;

    Raster::from_fn(w, h, |x, y| {
        let (xm, xp, ym, yp) = wrap_neighbours(x, y, w, h);

        let left = height_at(xm, y);
        let right = height_at(xp, y);
        let above = height_at(x, ym);
        let below = height_at(x, yp);

        let dx = (left - right) * strength;
        let dy = (above - below) * strength;

        match encoding {
            NormalEncoding::Unnormalized => [encode_normal(dx), encode_normal(dy), 255, 255],
            NormalEncoding::Normalized => {
                let len = (dx * dx + dy * dy + 1.0).sqrt();
                [
                    encode_normal(dx / len),
                    encode_normal(dy / len),
                    encode_normal(1.0 / len),
                    255,
                ]
            }
        }
    })
}

/// Toroidal neighbour indices `(x−1, x+1, y−1, y+1)`.
///
/// Requires `x < w` and `y < h`, so both dimensions are non-zero.
#[inline]
fn wrap_neighbours(x: u32, y: u32, w: u32, h: u32) -> (u32, u32, u32, u32) {
    (wrap_prev(x, w), wrap_next(x, w), wrap_prev(y, h), wrap_next(y, h))
}

#[inline]
fn wrap_prev(i: u32, n: u32) -> u32 {
    if i == 0 { n - 1 } else { i - 1 }
}

#[inline]
fn wrap_next(i: u32, n: u32) -> u32 {
    if i + 1 == n { 0 } else { i + 1 }
}

/// Map a component from `[-1, 1]` to `[0, 255]`, flooring and clamping.
#[inline]
fn encode_normal(n: f64) -> u8 {
    ((n * 0.5 + 0.5) * 255.0).floor().clamp(0.0, 255.0) as u8
}
