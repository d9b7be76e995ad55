use crate::common::gpio::GpiodFlags;
use crate::chip::{Lp8558Chip, RegisterDump, LP8558_REQUIRED_FUNCTIONALITY};
use crate::error::{Errno, Result};
use crate::hal::{dev_dbg, DelayMs, GpioConsumer, GpioDesc, SmbusClient};
use crate::{Lp8558DriverConfig, LP8558_ENABLE_CON_ID};

/// Both dumps of a completed probe
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Registers as found, before the enable line is touched
    pub before: RegisterDump,
    /// Registers after disable, hold, enable, settle
    pub after: RegisterDump,
}

impl DiagnosticReport {
    /// What a completed probe tells the bus framework
    pub const VERDICT: Errno = Errno::NoDevice;

    /// Always `Err(ENODEV)`: the test driver must never stay bound
    pub fn into_result(self) -> Result<()> {
        Err(Self::VERDICT)
    }
}

/// The LP8558 test driver
pub struct Lp8558TestDriver {
    config: Lp8558DriverConfig,
}

impl Lp8558TestDriver {
    /// Create a new test driver
    pub fn new(config: Lp8558DriverConfig) -> Self {
        Self { config }
    }

    /// Run the dump sequence
    ///
    /// Errors out before touching anything if the adapter lacks I2C block
    /// support (`EIO`), or with the gpio error if the enable line cannot be
    /// requested. Otherwise both dumps are returned. The enable line ends
    /// low and is released when this returns.
    pub fn probe<C, G, D>(
        &self,
        client: &mut C,
        gpio: &mut G,
        delay: &mut D,
    ) -> Result<DiagnosticReport>
    where
        C: SmbusClient,
        G: GpioConsumer,
        D: DelayMs,
    {
        if !client.check_functionality(LP8558_REQUIRED_FUNCTIONALITY) {
            return Err(Errno::Io);
        }

        let mut enable = gpio.get(LP8558_ENABLE_CON_ID, GpiodFlags::ASIS)?;
        let timing = &self.config.timing;
        let mut chip = Lp8558Chip::new(client);

        let before = chip.dump();

        dev_dbg!(chip.dev(), "disable backlight, hold {} ms", timing.get_disable_hold_ms());
        enable.set_value_cansleep(false);
        delay.msleep(timing.get_disable_hold_ms());

        dev_dbg!(chip.dev(), "enable backlight, settle {} ms", timing.get_enable_settle_ms());
        enable.set_value_cansleep(true);
        delay.msleep(timing.get_enable_settle_ms());
        let after = chip.dump();

        dev_dbg!(chip.dev(), "disable backlight again");
        enable.set_value_cansleep(false);

        Ok(DiagnosticReport { before, after })
    }

    /// Probe entry for the bus framework: never returns `Ok`
    pub fn probe_and_detach<C, G, D>(
        &self,
        client: &mut C,
        gpio: &mut G,
        delay: &mut D,
    ) -> Result<()>
    where
        C: SmbusClient,
        G: GpioConsumer,
        D: DelayMs,
    {
        self.probe(client, gpio, delay)?.into_result()
    }
}
