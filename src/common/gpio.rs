use bitflags::bitflags;

bitflags! {
    /// GPIO consumer request flags, bit compatible with `enum gpiod_flags`
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct GpiodFlags: u32 {
        /// Direction is set on request
        const DIR_SET    = 1 << 0;
        /// Direction is output
        const DIR_OUT    = 1 << 1;
        /// Initial output value is high
        const DIR_VAL    = 1 << 2;
        /// Output is open drain
        const OPEN_DRAIN = 1 << 3;
    }
}

impl GpiodFlags {
    /// Leave direction and value as the firmware left them
    pub const ASIS: GpiodFlags = GpiodFlags::empty();
    /// Input
    pub const IN: GpiodFlags = GpiodFlags::DIR_SET;
    /// Output, initially low
    pub const OUT_LOW: GpiodFlags = GpiodFlags::DIR_SET.union(GpiodFlags::DIR_OUT);
    /// Output, initially high
    pub const OUT_HIGH: GpiodFlags = GpiodFlags::OUT_LOW.union(GpiodFlags::DIR_VAL);
    /// Open drain output, initially low
    pub const OUT_LOW_OPEN_DRAIN: GpiodFlags = GpiodFlags::OUT_LOW.union(GpiodFlags::OPEN_DRAIN);
    /// Open drain output, initially high
    pub const OUT_HIGH_OPEN_DRAIN: GpiodFlags = GpiodFlags::OUT_HIGH.union(GpiodFlags::OPEN_DRAIN);
}
