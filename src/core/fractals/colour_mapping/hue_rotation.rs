use crate::core::actions::render_band::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Phase between channels, roughly 2π/3.
const CHANNEL_PHASE: f64 = 2.09439;
const HUE_OFFSET: f64 = 7.0;
const ITERATIONS_PER_RADIAN: f64 = 200.0;

/// Fixed-saturation HSB approximation: each channel is a cosine of the hue,
/// scaled so only the crest lands in `0..=255`. Everything else wraps modulo
/// 256, which produces the banded palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HueRotationColourMap {
    max_iterations: u32,
}

impl HueRotationColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// Truncates toward zero, then keeps the low byte.
#[inline]
fn channel(hue: f64) -> u8 {
    let value = 10000.0 * hue.cos() - 9900.0;
    (value as i64) as u8
}

impl ColourMap for HueRotationColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let hue = HUE_OFFSET + f64::from(iterations) / ITERATIONS_PER_RADIAN;

        Colour {
            r: channel(hue),
            g: channel(hue - CHANNEL_PHASE),
            b: channel(hue + CHANNEL_PHASE),
        }
    }

    fn display_name(&self) -> &str {
        "Hue rotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_maps_to_black() {
        let colour_map = HueRotationColourMap::new(400);

        assert_eq!(colour_map.map(400), Colour::BLACK);
    }

    #[test]
    fn one_below_cap_is_pinned() {
        let colour_map = HueRotationColourMap::new(400);

        assert_eq!(
            colour_map.map(399),
            Colour {
                r: 210,
                g: 46,
                b: 253
            }
        );
    }

    #[test]
    fn immediate_escape_is_pinned() {
        let colour_map = HueRotationColourMap::new(400);

        assert_eq!(
            colour_map.map(0),
            Colour {
                r: 200,
                g: 213,
                b: 97
            }
        );
    }

    #[test]
    fn only_cap_maps_to_black() {
        let colour_map = HueRotationColourMap::new(400);

        for iterations in 0..400 {
            assert!(
                !colour_map.map(iterations).is_black(),
                "iteration {} mapped to black",
                iterations
            );
        }
    }

    #[test]
    fn colour_depends_only_on_iterations() {
        let short_cap = HueRotationColourMap::new(256);
        let long_cap = HueRotationColourMap::new(1000);

        assert_eq!(short_cap.map(100), long_cap.map(100));
    }
}
