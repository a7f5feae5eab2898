//! High-level controller for a linear addressable LED strip.
//!
//! [`LedStrip`] owns the pixel buffer, the pixel bus and a delay source.
//! Every mutating call updates the buffer and then pushes the whole strip
//! to the bus once; the returned future resolves only after that write.

use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use smart_leds::{SmartLedsWriteAsync, RGB8};

use crate::animation::{rainbow_frame, AnimationOutcome, CancelToken, RainbowConfig};
use crate::color::{is_valid_brightness, scale};
use crate::error::LedError;

/// Controller for a strip of `N` RGB LEDs.
///
/// Generic over the pixel bus `BUS` (any [`SmartLedsWriteAsync`] driver
/// taking [`RGB8`], e.g. a WS2812 PWM/SPI/RMT driver) and the delay source
/// `D` used to pace animations (e.g. `embassy_time::Delay`).
///
/// # Example
///
/// ```ignore
/// use wsd_rgb_led::LedStrip;
///
/// let mut strip: LedStrip<_, _, 8> = LedStrip::new(ws2812, embassy_time::Delay)?;
/// strip.set_color((10, 20, 30)).await?;
/// strip.set_brightness(0.5).await?;
/// strip.rainbow(Duration::from_millis(20)).await?;
/// strip.clear().await?;
/// ```
pub struct LedStrip<BUS, D, const N: usize> {
    bus: BUS,
    delay: D,
    pixels: [RGB8; N],
}

impl<BUS, D, const N: usize> LedStrip<BUS, D, N>
where
    BUS: SmartLedsWriteAsync<Color = RGB8>,
    D: DelayNs,
{
    /// Create a controller for `N` LEDs.
    ///
    /// Takes ownership of the bus so no other code can drive the same
    /// output. No bus traffic is generated; the buffer starts all black.
    ///
    /// # Errors
    /// * [`LedError::InvalidArgument`] if `N == 0`
    pub fn new(bus: BUS, delay: D) -> Result<Self, LedError<BUS::Error>> {
        if N == 0 {
            return Err(LedError::InvalidArgument);
        }

        Ok(Self {
            bus,
            delay,
            pixels: [RGB8::default(); N],
        })
    }

    /// Release the bus and delay source.
    pub fn release(self) -> (BUS, D) {
        (self.bus, self.delay)
    }

    // -----------------------------------------------------------------------
    // Buffer access
    // -----------------------------------------------------------------------

    /// Number of LEDs in the strip.
    pub fn len(&self) -> usize {
        N
    }

    /// Always `false`: a strip is never constructed with zero LEDs.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current contents of the pixel buffer, in bus order.
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    /// Color of a single pixel, or `None` if `index >= N`.
    pub fn pixel(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    // -----------------------------------------------------------------------
    // Whole-strip operations
    // -----------------------------------------------------------------------

    /// Write the current buffer to the bus without changing it.
    ///
    /// # Errors
    /// * [`LedError::Bus`] on transmission failure
    pub async fn show(&mut self) -> Result<(), LedError<BUS::Error>> {
        self.bus
            .write(self.pixels.iter().copied())
            .await
            .map_err(LedError::Bus)
    }

    /// Set every LED to `color` and write the strip once.
    ///
    /// Accepts anything convertible to [`RGB8`], including `(r, g, b)`
    /// tuples.
    ///
    /// # Errors
    /// * [`LedError::Bus`] on transmission failure
    pub async fn set_color(
        &mut self,
        color: impl Into<RGB8>,
    ) -> Result<(), LedError<BUS::Error>> {
        self.pixels.fill(color.into());
        self.show().await
    }

    /// Set a single LED and write the strip once.
    ///
    /// Each call is its own bus write; updates are not batched.
    ///
    /// # Errors
    /// * [`LedError::IndexOutOfRange`] if `index >= N`
    /// * [`LedError::Bus`] on transmission failure
    pub async fn set_pixel(
        &mut self,
        index: usize,
        color: impl Into<RGB8>,
    ) -> Result<(), LedError<BUS::Error>> {
        let Some(pixel) = self.pixels.get_mut(index) else {
            return Err(LedError::IndexOutOfRange);
        };
        *pixel = color.into();
        self.show().await
    }

    /// Scale every LED by `brightness` and write the strip once.
    ///
    /// Each channel becomes `floor(channel * brightness)`. The scaling is
    /// applied to the buffer itself: no base color is kept, so repeated
    /// calls compound (`0.5` twice gives a quarter) and a later `1.0` does
    /// not restore anything. Set the color again to undo dimming.
    ///
    /// # Errors
    /// * [`LedError::InvalidArgument`] if `brightness` is not in
    ///   `0.0..=1.0` (including NaN); the strip is left untouched
    /// * [`LedError::Bus`] on transmission failure
    pub async fn set_brightness(
        &mut self,
        brightness: f64,
    ) -> Result<(), LedError<BUS::Error>> {
        if !is_valid_brightness(brightness) {
            return Err(LedError::InvalidArgument);
        }

        for pixel in self.pixels.iter_mut() {
            *pixel = scale(*pixel, brightness);
        }
        self.show().await
    }

    /// Turn every LED off and write the strip once.
    ///
    /// # Errors
    /// * [`LedError::Bus`] on transmission failure
    pub async fn clear(&mut self) -> Result<(), LedError<BUS::Error>> {
        self.set_color(RGB8::default()).await
    }

    // -----------------------------------------------------------------------
    // Animation
    // -----------------------------------------------------------------------

    /// Run one full rainbow cycle: 256 frames, each written once and
    /// followed by `frame_delay`.
    ///
    /// Runs to completion; use [`rainbow_with`](Self::rainbow_with) for a
    /// cancellable run or a different frame count.
    ///
    /// # Errors
    /// * [`LedError::Bus`] on transmission failure; the animation stops at
    ///   the failing frame
    pub async fn rainbow(
        &mut self,
        frame_delay: Duration,
    ) -> Result<(), LedError<BUS::Error>> {
        let config = RainbowConfig::with_delay(frame_delay);
        self.rainbow_with::<NoopRawMutex>(&config, None)
            .await
            .map(|_| ())
    }

    /// Run a rainbow animation as configured by `config`.
    ///
    /// For each frame: check `cancel`, render the frame, write it, then
    /// wait `config.frame_delay`. Writes and delays strictly alternate.
    ///
    /// # Returns
    /// [`AnimationOutcome::Completed`] when all frames ran, or
    /// [`AnimationOutcome::Cancelled`] with the number of frames written if
    /// the token fired first. The token is not reset.
    ///
    /// # Errors
    /// * [`LedError::Bus`] on transmission failure
    pub async fn rainbow_with<M: RawMutex>(
        &mut self,
        config: &RainbowConfig,
        cancel: Option<&CancelToken<M>>,
    ) -> Result<AnimationOutcome, LedError<BUS::Error>> {
        // DelayNs takes u32 microseconds; longer frame delays saturate.
        let delay_us = u32::try_from(config.frame_delay.as_micros()).unwrap_or(u32::MAX);

        for frame in 0..config.frames {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                #[cfg(feature = "defmt")]
                defmt::debug!("Rainbow cancelled after {} frames", frame);
                return Ok(AnimationOutcome::Cancelled { frames: frame });
            }

            rainbow_frame(frame, &mut self.pixels);
            self.show().await?;
            self.delay.delay_us(delay_us).await;
        }

        Ok(AnimationOutcome::Completed)
    }
}
