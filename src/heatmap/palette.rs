use image::Rgb;

/// Sequential dark-to-light colour map, sampled at evenly spaced anchors.
const ANCHORS: [[u8; 3]; 6] = [
    [0x03, 0x05, 0x1A],
    [0x4C, 0x1D, 0x4B],
    [0xA1, 0x1A, 0x5B],
    [0xE8, 0x3F, 0x3F],
    [0xF6, 0x9C, 0x73],
    [0xFA, 0xEB, 0xDD],
];

pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
pub const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// colour at position t ∈ [0, 1], linearly interpolated between anchors
pub fn color(t: f64) -> Rgb<u8> {
    let t = if t.is_finite() { t.clamp(0., 1.) } else { 0. };
    let span = (ANCHORS.len() - 1) as f64;
    let lo = (t * span).floor().min(span - 1.) as usize;
    let w = t * span - lo as f64;
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * w).round() as u8;
    let (a, b) = (ANCHORS[lo], ANCHORS[lo + 1]);
    Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

/// relative luminance in [0, 1]
pub fn luminance(Rgb([r, g, b]): Rgb<u8>) -> f64 {
    (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.
}

/// readable annotation colour on top of `background`
pub fn ink(background: Rgb<u8>) -> Rgb<u8> {
    if luminance(background) > 0.5 { BLACK } else { WHITE }
}

/// position of `value` within [min, max]; a flat matrix sits mid-scale
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(color(0.), Rgb(ANCHORS[0]));
        assert_eq!(color(1.), Rgb(ANCHORS[ANCHORS.len() - 1]));
        assert_eq!(color(-3.), color(0.));
        assert_eq!(color(f64::NAN), color(0.));
    }

    #[test]
    fn anchors() {
        assert_eq!(color(0.4), Rgb(ANCHORS[2]));
    }

    #[test]
    fn monotone() {
        let lum = (0..=20)
            .map(|i| luminance(color(i as f64 / 20.)))
            .collect::<Vec<_>>();
        assert!(lum.windows(2).all(|w| w[0] <= w[1] + 1e-9));
    }

    #[test]
    fn contrast() {
        assert_eq!(ink(color(0.)), WHITE);
        assert_eq!(ink(color(1.)), BLACK);
    }

    #[test]
    fn scaling() {
        assert_eq!(scale(2., 0., 4.), 0.5);
        assert_eq!(scale(-3., -3., 0.), 0.);
        assert_eq!(scale(7., 7., 7.), 0.5);
    }
}
