//! Canned two-screen demo for bring-up checks.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::DisplayConfig;

/// First demo screen.
pub const DEMO_GREETING: &str = "Hello, World!";

/// Second demo screen.
pub const DEMO_FAREWELL: &str = "Demo Complete!";

/// Run the demo on an initialised driver.
///
/// Clears the panel, shows [`DEMO_GREETING`] at `config.greeting_at`, holds
/// for `config.demo_hold`, then clears and shows [`DEMO_FAREWELL`] at
/// `config.farewell_at` for another hold. The panel is left showing the
/// second screen.
///
/// ```ignore
/// let mut oled = OledDriver::new(i2c, config.address);
/// oled.init().await?;
/// run_demo(&mut oled, &mut embassy_time::Delay, &config).await?;
/// ```
///
/// # Errors
///
/// Propagates the first driver error, including
/// [`OledError::NotInitialized`] if `init()` was never called.
pub async fn run_demo<I2C, D>(
    driver: &mut OledDriver<I2C>,
    delay: &mut D,
    config: &DisplayConfig,
) -> Result<(), OledError>
where
    I2C: I2c,
    D: DelayNs,
{
    let hold_ms = config.demo_hold_ms();

    driver.clear().await?;
    driver.write(DEMO_GREETING, config.greeting_at).await?;
    delay.delay_ms(hold_ms).await;

    driver.clear().await?;
    driver.write(DEMO_FAREWELL, config.farewell_at).await?;
    delay.delay_ms(hold_ms).await;

    #[cfg(feature = "defmt")]
    defmt::info!("OLED demo complete");

    Ok(())
}
