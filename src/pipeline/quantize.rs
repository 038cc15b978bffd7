//! Six-tone quantization with luminance-gamma banding and gray suppression

use crate::io::configuration::{P_GRAY_TO_BLACK, P_OFF_WHITE_TO_WHITE, P_SILVER_TO_WHITE};
use crate::pipeline::random::RandomStream;
use crate::pipeline::tone::Tone;

/// Relative luminance of an RGBA sample on the 0..255 scale
///
/// Rec. 709 coefficients; alpha is ignored since the pipeline is fully
/// opaque.
pub fn luminance(rgba: [u8; 4]) -> f64 {
    let [r, g, b, _] = rgba;
    0.072_2f64.mul_add(
        f64::from(b),
        0.212_6f64.mul_add(f64::from(r), 0.715_2 * f64::from(g)),
    )
}

/// Band an RGBA sample into a tone before suppression
///
/// Gamma below 1 boosts the biased luminance for all non-black inputs,
/// widening the white bands. No randomness is consumed.
pub fn band(rgba: [u8; 4], gamma: f64) -> Tone {
    let biased = (luminance(rgba) / 255.0).powf(gamma) * 255.0;
    Tone::from_biased_luma(biased)
}

/// Map an RGBA sample to one of the six fixed tones
///
/// Banding per [`band`], then a one-shot stochastic migration of the four
/// interior bands toward the extremes. Each interior band consumes exactly
/// one draw from `rng`; the extremes consume none. That draw accounting is
/// part of the pipeline's determinism contract.
pub fn quantize<R: RandomStream>(rgba: [u8; 4], gamma: f64, rng: &mut R) -> Tone {
    suppress_gray(band(rgba, gamma), rng)
}

/// Migrate interior tones toward pure black or white probabilistically
fn suppress_gray<R: RandomStream>(tone: Tone, rng: &mut R) -> Tone {
    match tone {
        Tone::OffWhite => promote(tone, Tone::White, P_OFF_WHITE_TO_WHITE, rng),
        Tone::Silver => promote(tone, Tone::White, P_SILVER_TO_WHITE, rng),
        Tone::Charcoal | Tone::Gray => promote(tone, Tone::Black, P_GRAY_TO_BLACK, rng),
        Tone::Black | Tone::White => tone,
    }
}

fn promote<R: RandomStream>(tone: Tone, target: Tone, probability: f64, rng: &mut R) -> Tone {
    if rng.next_f64() < probability {
        target
    } else {
        tone
    }
}
