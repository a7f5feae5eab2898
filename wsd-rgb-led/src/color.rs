//! Pure color helpers: the three-phase color wheel and brightness scaling.
//!
//! Nothing in this module touches the bus; [`LedStrip`](crate::LedStrip)
//! composes these into frames.

use smart_leds::RGB8;

/// Width of one wheel band. The wheel is split into three bands of 85
/// positions each (the last band has 86).
const BAND: u8 = 85;

/// Map a wheel position to a point on the red → green → blue color cycle.
///
/// ```text
///   0 ..  84   (3p, 255 - 3p, 0)          green → red
///  85 .. 169   (255 - 3p, 0, 3p)          red → blue
/// 170 .. 255   (0, 3p, 255 - 3p)          blue → green
/// ```
///
/// where `p` is the offset into the band. Adjacent positions differ by at
/// most 3 on every channel, including the 255 → 0 wrap.
///
/// Callers working with wider counters must mask with `& 255` first; the
/// `u8` argument makes any other input unrepresentable.
///
/// # Example
/// ```
/// use wsd_rgb_led::color_wheel;
/// use smart_leds::RGB8;
///
/// assert_eq!(color_wheel(0), RGB8::new(0, 255, 0));
/// assert_eq!(color_wheel(85), RGB8::new(255, 0, 0));
/// assert_eq!(color_wheel(170), RGB8::new(0, 0, 255));
/// ```
pub fn color_wheel(position: u8) -> RGB8 {
    if position < BAND {
        RGB8::new(position * 3, 255 - position * 3, 0)
    } else if position < 2 * BAND {
        let p = position - BAND;
        RGB8::new(255 - p * 3, 0, p * 3)
    } else {
        let p = position - 2 * BAND;
        RGB8::new(0, p * 3, 255 - p * 3)
    }
}

/// Returns `true` if `brightness` lies in `0.0..=1.0`. NaN is rejected.
pub fn is_valid_brightness(brightness: f64) -> bool {
    (0.0..=1.0).contains(&brightness)
}

/// Scale every channel of `pixel` by `brightness`, truncating toward zero.
///
/// `brightness` is expected to be in `0.0..=1.0`; values outside that range
/// saturate at the channel limits. Range checking is the caller's job (see
/// [`LedStrip::set_brightness`](crate::LedStrip::set_brightness)).
pub fn scale(pixel: RGB8, brightness: f64) -> RGB8 {
    // Float-to-int `as` casts truncate toward zero and saturate. Stay in f64:
    // an f32 product can round up across an integer (100 * 0.29 gives 29.0).
    let channel = |c: u8| (f64::from(c) * brightness) as u8;
    RGB8::new(channel(pixel.r), channel(pixel.g), channel(pixel.b))
}
