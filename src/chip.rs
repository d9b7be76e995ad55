use crate::common::functionality::I2cFuncFlags;
use crate::hal::{dev_dbg, dev_err, SmbusClient};
use crate::registers::*;

/// What the adapter must offer before the chip is touched
pub(crate) const LP8558_REQUIRED_FUNCTIONALITY: I2cFuncFlags = I2cFuncFlags::SMBUS_I2C_BLOCK;

/// One pass over the diagnostic registers
///
/// Every value is what the SMBus byte read returned: the data byte, or the
/// negative errno when the transfer failed. A failed read and a register
/// holding a low value are only told apart by the sign, and nothing in the
/// probe looks at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisterDump {
    /// `LP855X_BRIGHTNESS_CTRL`
    pub brightness: i32,
    /// `LP855X_DEVICE_CTRL`
    pub device_ctrl: i32,
    /// `LP8558_EEPROM_START..=LP8558_EEPROM_END`
    pub eeprom: [i32; LP8558_EEPROM_LEN],
}

impl RegisterDump {
    /// Number of registers in one dump
    pub const LEN: usize = 2 + LP8558_EEPROM_LEN;

    /// `(register, value)` in read order
    pub fn iter(&self) -> impl Iterator<Item = (u8, i32)> + '_ {
        [
            (LP855X_BRIGHTNESS_CTRL, self.brightness),
            (LP855X_DEVICE_CTRL, self.device_ctrl),
        ]
        .into_iter()
        .chain(eeprom_window().zip(self.eeprom.iter().copied()))
    }

    /// Device control decoded, if its read succeeded
    pub fn device_ctrl(&self) -> Option<DeviceCtrl> {
        u8::try_from(self.device_ctrl).ok().map(DeviceCtrl::from)
    }
}

/// Register access on a borrowed client
pub(crate) struct Lp8558Chip<'a, C: SmbusClient> {
    client: &'a mut C,
}

impl<'a, C: SmbusClient> Lp8558Chip<'a, C> {
    pub(crate) fn new(client: &'a mut C) -> Self {
        Self { client }
    }

    /// The client, for logging against its device
    pub(crate) fn dev(&self) -> &C {
        &*self.client
    }

    /// Read `reg` the way `i2c_smbus_read_byte_data` reports it
    fn read_raw(&mut self, reg: u8) -> i32 {
        match self.client.read_byte_data(reg) {
            Ok(val) => i32::from(val),
            Err(errno) => errno.to_errno(),
        }
    }

    /// Read and log every diagnostic register
    pub(crate) fn dump(&mut self) -> RegisterDump {
        let brightness = self.read_raw(LP855X_BRIGHTNESS_CTRL);
        let device_ctrl = self.read_raw(LP855X_DEVICE_CTRL);
        dev_err!(
            self.dev(),
            "Brightness: {}, Device Control: {}",
            brightness, device_ctrl
        );

        let mut eeprom = [0; LP8558_EEPROM_LEN];
        for (slot, reg) in eeprom.iter_mut().zip(eeprom_window()) {
            *slot = self.read_raw(reg);
            dev_err!(self.dev(), "EEPROM({:x}) = {:#x}", reg, *slot);
        }

        let dump = RegisterDump {
            brightness,
            device_ctrl,
            eeprom,
        };
        if let Some(ctrl) = dump.device_ctrl() {
            dev_dbg!(
                self.dev(),
                "device control: backlight {}, brightness source {:?}",
                if ctrl.backlight_on { "on" } else { "off" },
                ctrl.source
            );
        }
        dump
    }
}
