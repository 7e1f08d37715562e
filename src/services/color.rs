//! Hue → display color encoding for daily entries.

/// Color used when the classifier reports no hue.
pub const NEUTRAL_GREY: &str = "#808080";

const SATURATION: f64 = 0.85;
const LIGHTNESS: f64 = 0.65;

const ONE_SIXTH: f64 = 1.0 / 6.0;
const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Encode a hue in degrees as a `#rrggbb` color at fixed saturation and lightness.
///
/// The hue must already lie in `[0, 360)`; see [`normalize_hue`]. Channels are
/// truncated, not rounded, when scaled to 0-255.
pub fn encode(hue: Option<f64>) -> String {
    let Some(hue) = hue else {
        return NEUTRAL_GREY.to_string();
    };

    let (r, g, b) = hls_to_rgb(hue / 360.0, LIGHTNESS, SATURATION);
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Reduce an arbitrary hue into `[0, 360)`. Non-finite values count as no hue.
pub fn normalize_hue(hue: Option<f64>) -> Option<f64> {
    hue.filter(|h| h.is_finite()).map(|h| {
        let wrapped = h.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    })
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

/// HLS → RGB with all components in `[0, 1]`.
fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}
