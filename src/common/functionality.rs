//! I2C adapter functionality bits

use bitflags::bitflags;

bitflags! {
    /// To determine what I2C functionality is present
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct I2cFuncFlags: u32 {
        /// Plain i2c-level commands
        const I2C                    = 0x00000001;
        /// 10 bit addressing
        const TEN_BIT_ADDR           = 0x00000002;
        /// I2C_M_IGNORE_NAK etc.
        const PROTOCOL_MANGLING      = 0x00000004;
        /// SMBus packet error checking
        const SMBUS_PEC              = 0x00000008;
        /// I2C_M_NOSTART
        const NOSTART                = 0x00000010;
        /// Slave support
        const SLAVE                  = 0x00000020;
        /// SMBus 2.0 or later
        const SMBUS_BLOCK_PROC_CALL  = 0x00008000;
        const SMBUS_QUICK            = 0x00010000;
        const SMBUS_READ_BYTE        = 0x00020000;
        const SMBUS_WRITE_BYTE       = 0x00040000;
        const SMBUS_READ_BYTE_DATA   = 0x00080000;
        const SMBUS_WRITE_BYTE_DATA  = 0x00100000;
        const SMBUS_READ_WORD_DATA   = 0x00200000;
        const SMBUS_WRITE_WORD_DATA  = 0x00400000;
        const SMBUS_PROC_CALL        = 0x00800000;
        const SMBUS_READ_BLOCK_DATA  = 0x01000000;
        const SMBUS_WRITE_BLOCK_DATA = 0x02000000;
        /// I2C-like block xfer
        const SMBUS_READ_I2C_BLOCK   = 0x04000000;
        /// w/ 1-byte reg. addr.
        const SMBUS_WRITE_I2C_BLOCK  = 0x08000000;
        const SMBUS_HOST_NOTIFY      = 0x10000000;

        // multi bits
        const SMBUS_BYTE = Self::SMBUS_READ_BYTE.bits() | Self::SMBUS_WRITE_BYTE.bits();
        const SMBUS_BYTE_DATA = Self::SMBUS_READ_BYTE_DATA.bits() | Self::SMBUS_WRITE_BYTE_DATA.bits();
        const SMBUS_WORD_DATA = Self::SMBUS_READ_WORD_DATA.bits() | Self::SMBUS_WRITE_WORD_DATA.bits();
        const SMBUS_BLOCK_DATA = Self::SMBUS_READ_BLOCK_DATA.bits() | Self::SMBUS_WRITE_BLOCK_DATA.bits();
        const SMBUS_I2C_BLOCK = Self::SMBUS_READ_I2C_BLOCK.bits() | Self::SMBUS_WRITE_I2C_BLOCK.bits();
    }
}
