//! The fixed six-tone output palette and luminance banding

use crate::io::configuration::LUMA_THRESHOLDS;

/// One of the six fixed output tones, ordered dark to light
///
/// Every pixel of a result image carries exactly one of these values.
/// The palette is global and immutable; tones compare by band order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tone {
    /// Near-black `#141414`
    Black,
    /// Dark gray `#4d4d4d`
    Charcoal,
    /// Mid-dark gray `#636363`
    Gray,
    /// Light gray `#c0c0c0`
    Silver,
    /// Near-white `#eaeaea`
    OffWhite,
    /// Pure white `#ffffff`
    White,
}

impl Tone {
    /// All six tones in band order, dark to light
    pub const ALL: [Self; 6] = [
        Self::Black,
        Self::Charcoal,
        Self::Gray,
        Self::Silver,
        Self::OffWhite,
        Self::White,
    ];

    /// Fully opaque RGBA value of this tone
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Black => [20, 20, 20, 255],
            Self::Charcoal => [77, 77, 77, 255],
            Self::Gray => [99, 99, 99, 255],
            Self::Silver => [192, 192, 192, 255],
            Self::OffWhite => [234, 234, 234, 255],
            Self::White => [255, 255, 255, 255],
        }
    }

    /// Band a gamma-biased luminance value (0..255 scale) into a tone
    pub fn from_biased_luma(biased_luma: f64) -> Self {
        let [t0, t1, t2, t3, t4] = LUMA_THRESHOLDS;
        if biased_luma < t0 {
            Self::Black
        } else if biased_luma < t1 {
            Self::Charcoal
        } else if biased_luma < t2 {
            Self::Gray
        } else if biased_luma < t3 {
            Self::Silver
        } else if biased_luma < t4 {
            Self::OffWhite
        } else {
            Self::White
        }
    }

    /// Whether this tone sits at either end of the palette
    ///
    /// The extremes are exempt from gray suppression and never consume
    /// a random draw during quantization.
    pub const fn is_extreme(self) -> bool {
        matches!(self, Self::Black | Self::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banding_is_step_function_of_luminance() {
        assert_eq!(Tone::from_biased_luma(0.0), Tone::Black);
        assert_eq!(Tone::from_biased_luma(21.9), Tone::Black);
        assert_eq!(Tone::from_biased_luma(22.0), Tone::Charcoal);
        assert_eq!(Tone::from_biased_luma(59.9), Tone::Charcoal);
        assert_eq!(Tone::from_biased_luma(60.0), Tone::Gray);
        assert_eq!(Tone::from_biased_luma(89.9), Tone::Gray);
        assert_eq!(Tone::from_biased_luma(90.0), Tone::Silver);
        assert_eq!(Tone::from_biased_luma(134.9), Tone::Silver);
        assert_eq!(Tone::from_biased_luma(135.0), Tone::OffWhite);
        assert_eq!(Tone::from_biased_luma(194.9), Tone::OffWhite);
        assert_eq!(Tone::from_biased_luma(195.0), Tone::White);
        assert_eq!(Tone::from_biased_luma(255.0), Tone::White);
    }

    #[test]
    fn test_tones_are_ordered_dark_to_light() {
        for pair in Tone::ALL.windows(2) {
            if let [darker, lighter] = pair {
                assert!(darker < lighter);
                assert!(darker.rgba() < lighter.rgba());
            }
        }
    }

    #[test]
    fn test_only_extremes_are_exempt_from_suppression() {
        let exempt: Vec<Tone> = Tone::ALL.iter().copied().filter(|t| t.is_extreme()).collect();
        assert_eq!(exempt, vec![Tone::Black, Tone::White]);
    }
}
