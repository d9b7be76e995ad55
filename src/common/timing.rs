//! Enable line toggle timing

/// How long the enable line is held low before re-enabling, in ms
pub const LP8558_DISABLE_HOLD_MS: u32 = 2000;
/// How long to wait after enabling before the second dump, in ms
pub const LP8558_ENABLE_SETTLE_MS: u32 = 1;

/// Toggle timing for the probe dump sequence
///
/// `disable_hold_ms` is the time the backlight stays disabled between the
/// two dumps, `enable_settle_ms` the time the chip gets after enable before
/// its registers are read again. Both are lower bounds: the delay provider
/// may oversleep.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProbeTiming {
    disable_hold_ms: u32,
    enable_settle_ms: u32,
}

impl Default for ProbeTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTiming {
    /// Create the LP8558 default timing
    pub const fn new() -> ProbeTiming {
        ProbeTiming {
            disable_hold_ms: LP8558_DISABLE_HOLD_MS,
            enable_settle_ms: LP8558_ENABLE_SETTLE_MS,
        }
    }

    /// get disable hold in ms
    #[inline]
    pub fn get_disable_hold_ms(&self) -> u32 {
        self.disable_hold_ms
    }

    /// get enable settle in ms
    #[inline]
    pub fn get_enable_settle_ms(&self) -> u32 {
        self.enable_settle_ms
    }

    /// set disable_hold_ms and return self
    #[inline]
    pub fn disable_hold_ms(mut self, val: u32) -> Self {
        self.disable_hold_ms = val;
        self
    }

    /// set enable_settle_ms and return self
    #[inline]
    pub fn enable_settle_ms(mut self, val: u32) -> Self {
        self.enable_settle_ms = val;
        self
    }
}
