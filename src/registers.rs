//! LP855x register map
//!
//! Only the registers the test driver dumps are described here. The EEPROM
//! window is LP8558 specific, the two control registers are shared by the
//! whole LP8550/1/2/3/6/8 family.

use core::ops::RangeInclusive;

use tock_registers::register_bitfields;
use tock_registers::LocalRegisterCopy;

/// Brightness control
pub const LP855X_BRIGHTNESS_CTRL: u8 = 0x00;
/// Device control
pub const LP855X_DEVICE_CTRL: u8 = 0x01;
/// First EEPROM mapped register
pub const LP8558_EEPROM_START: u8 = 0x98;
/// Last EEPROM mapped register, inclusive
pub const LP8558_EEPROM_END: u8 = 0xAF;

/// Number of registers in the EEPROM window
pub const LP8558_EEPROM_LEN: usize = (LP8558_EEPROM_END - LP8558_EEPROM_START) as usize + 1;

/// EEPROM window as an address range
pub const fn eeprom_window() -> RangeInclusive<u8> {
    LP8558_EEPROM_START..=LP8558_EEPROM_END
}

register_bitfields![u8,
    pub(crate) DEVICE_CTRL [
        BRT_MODE OFFSET(1) NUMBITS(2) [],
        BL_CTL OFFSET(0) NUMBITS(1) [],
    ],
];

/// Where the chip takes its brightness from, `BRT_MODE` in device control
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BrightnessSource {
    /// PWM input only
    PwmOnly = 0,
    /// PWM input shaped by the brightness register
    Combined1 = 1,
    /// Brightness register only
    I2cOnly = 2,
    /// Brightness register shaped by the PWM input
    Combined2 = 3,
}

/// Decoded device control register
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeviceCtrl {
    /// `BL_CTL`, backlight enable. Only honoured in I2C only mode.
    pub backlight_on: bool,
    /// `BRT_MODE`
    pub source: BrightnessSource,
}

impl From<u8> for DeviceCtrl {
    fn from(val: u8) -> Self {
        let reg = LocalRegisterCopy::<u8, DEVICE_CTRL::Register>::new(val);
        let source = match reg.read(DEVICE_CTRL::BRT_MODE) {
            0 => BrightnessSource::PwmOnly,
            1 => BrightnessSource::Combined1,
            2 => BrightnessSource::I2cOnly,
            _ => BrightnessSource::Combined2,
        };
        DeviceCtrl {
            backlight_on: reg.is_set(DEVICE_CTRL::BL_CTL),
            source,
        }
    }
}
