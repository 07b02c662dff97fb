//! Color mapping for family curves.
//!
//! Plasma sequential palette, approximated by a fixed control-point table
//! with linear interpolation between entries. Perceived lightness increases
//! monotonically along the palette, so curves sorted by their physical
//! parameter read in order at a glance.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Rec. 601 luma, used as a cheap perceived-lightness proxy.
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Accent color for quality lines; deliberately outside the plasma gamut so
/// the two-phase grid never blends into the family curves.
pub const QUALITY_ACCENT: Rgb = Rgb::new(255, 0, 0);

// Plasma sampled at nine equally spaced positions.
const PLASMA_TABLE: [Rgb; 9] = [
    Rgb::new(13, 8, 135),
    Rgb::new(76, 2, 161),
    Rgb::new(126, 3, 168),
    Rgb::new(170, 35, 149),
    Rgb::new(204, 71, 120),
    Rgb::new(229, 107, 93),
    Rgb::new(248, 149, 64),
    Rgb::new(253, 197, 39),
    Rgb::new(240, 249, 33),
];

/// Sample the plasma palette at normalized position `t` in `[0, 1]`.
pub fn plasma(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let scaled = t * (PLASMA_TABLE.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(PLASMA_TABLE.len() - 1);
    let frac = scaled - lo as f64;

    let a = PLASMA_TABLE[lo];
    let b = PLASMA_TABLE[hi];
    Rgb::new(
        lerp_channel(a.r, b.r, frac),
        lerp_channel(a.g, b.g, frac),
        lerp_channel(a.b, b.b, frac),
    )
}

fn lerp_channel(a: u8, b: u8, frac: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
}

/// Map a physical parameter value to a palette color, normalized against the
/// `[min, max]` range of its curve family. A degenerate range (single curve,
/// `min == max`, or anything non-finite) maps to the palette midpoint.
pub fn color_for(value: f64, min: f64, max: f64) -> Rgb {
    if !(min < max) || !value.is_finite() {
        return plasma(0.5);
    }
    plasma(((value - min) / (max - min)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_hit_the_table() {
        assert_eq!(plasma(0.0), PLASMA_TABLE[0]);
        assert_eq!(plasma(1.0), PLASMA_TABLE[8]);
    }

    #[test]
    fn interior_value_differs_from_both_endpoints() {
        let low = color_for(200.0, 200.0, 300.0);
        let mid = color_for(250.0, 200.0, 300.0);
        let high = color_for(300.0, 200.0, 300.0);
        assert_ne!(mid, low);
        assert_ne!(mid, high);
        assert_ne!(low, high);
    }

    #[test]
    fn degenerate_range_is_the_midpoint() {
        assert_eq!(color_for(250.0, 250.0, 250.0), plasma(0.5));
        assert_eq!(color_for(250.0, 300.0, 200.0), plasma(0.5));
        assert_eq!(color_for(f64::NAN, 200.0, 300.0), plasma(0.5));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(color_for(100.0, 200.0, 300.0), plasma(0.0));
        assert_eq!(color_for(400.0, 200.0, 300.0), plasma(1.0));
    }

    #[test]
    fn luma_is_monotone_along_the_palette() {
        let mut previous = plasma(0.0).luma();
        for i in 1..=50 {
            let t = f64::from(i) / 50.0;
            let luma = plasma(t).luma();
            assert!(
                luma >= previous,
                "luma decreased at t={t}: {luma} < {previous}"
            );
            previous = luma;
        }
    }

    proptest! {
        #[test]
        fn never_panics_and_always_defined(
            value in prop::num::f64::ANY,
            min in -1e9f64..1e9,
            max in -1e9f64..1e9,
        ) {
            // No NaN inputs may escape as a panic or a bogus channel; the
            // result is always a palette color.
            let _ = color_for(value, min, max);
        }

        #[test]
        fn ordered_values_get_ordered_luma(
            (min, max) in (-1e6f64..1e6).prop_flat_map(|min| {
                ((min + 1.0)..1e6 + 2.0).prop_map(move |max| (min, max))
            }),
            (t1, t2) in (0.0f64..1.0).prop_flat_map(|t1| {
                (t1..1.0f64).prop_map(move |t2| (t1, t2))
            }),
        ) {
            let v1 = min + t1 * (max - min);
            let v2 = min + t2 * (max - min);
            let l1 = color_for(v1, min, max).luma();
            let l2 = color_for(v2, min, max).luma();
            // u8 channel quantization can jitter luma by a fraction of a
            // count; ordering must hold beyond that.
            prop_assert!(l2 >= l1 - 1.0);
        }
    }
}
