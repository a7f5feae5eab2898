//! Rainbow animation: configuration, frame rendering and cancellation.
//!
//! The frame loop itself lives on [`LedStrip`](crate::LedStrip) because it
//! needs the bus and the delay; this module holds the pieces that do not.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Duration;
use smart_leds::RGB8;

use crate::color::color_wheel;

/// Number of frames in one full trip around the color wheel.
pub const RAINBOW_FRAMES: u16 = 256;

/// Configuration for [`LedStrip::rainbow_with`](crate::LedStrip::rainbow_with).
///
/// [`RainbowConfig::default()`] runs one full wheel cycle at 50 frames per
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowConfig {
    /// Delay after each frame's bus write. Default: 20 ms.
    pub frame_delay: Duration,
    /// Number of frames to render. Default: [`RAINBOW_FRAMES`].
    ///
    /// Values above 256 keep cycling; the wheel offset wraps every 256
    /// frames.
    pub frames: u16,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(20),
            frames: RAINBOW_FRAMES,
        }
    }
}

impl RainbowConfig {
    /// One full cycle with the given per-frame delay.
    pub fn with_delay(frame_delay: Duration) -> Self {
        Self {
            frame_delay,
            ..Self::default()
        }
    }
}

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationOutcome {
    /// Every configured frame was written.
    Completed,
    /// The cancel token fired; `frames` frames were written before it was
    /// observed.
    Cancelled { frames: u16 },
}

/// Cooperative stop request for a running animation.
///
/// The animation polls the token once per frame, before rendering, so a
/// cancel takes effect within one frame delay. The token stays cancelled
/// until [`reset`](Self::reset) is called, which lets one token stop several
/// consecutive animations.
///
/// The token is usually shared through a `static`:
///
/// ```ignore
/// static STOP: CancelToken<CriticalSectionRawMutex> = CancelToken::new();
///
/// // Animation task
/// strip.rainbow_with(&RainbowConfig::default(), Some(&STOP)).await?;
///
/// // Button task
/// STOP.cancel();
/// ```
pub struct CancelToken<M: RawMutex> {
    signal: Signal<M, ()>,
}

impl<M: RawMutex> CancelToken<M> {
    /// Create a token in the not-cancelled state.
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.signal.signal(());
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called and not
    /// yet reset.
    pub fn is_cancelled(&self) -> bool {
        self.signal.signaled()
    }

    /// Return the token to the not-cancelled state.
    pub fn reset(&self) {
        self.signal.reset();
    }
}

impl<M: RawMutex> Default for CancelToken<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one rainbow frame into `pixels`.
///
/// Pixel `i` of an `n`-pixel strip gets wheel position
/// `(i * 256 / n + frame) & 255`, which spreads one full wheel across the
/// strip and shifts it by one position per frame.
pub fn rainbow_frame(frame: u16, pixels: &mut [RGB8]) {
    let len = pixels.len();
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let position = (i * 256 / len + frame as usize) & 255;
        *pixel = color_wheel(position as u8);
    }
}
