//! Recording host mocks for unit tests

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::Level;

use crate::common::functionality::I2cFuncFlags;
use crate::common::gpio::GpiodFlags;
use crate::error::{Errno, Result};
use crate::hal::{DelayMs, GpioConsumer, GpioDesc, SmbusClient};

/// Host operation, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Read(u8),
    Acquire(String, GpiodFlags),
    Set(bool),
    Sleep(u32),
    Release,
    Log(Level, String),
}

type Trace = Rc<RefCell<Vec<Event>>>;

/// Shared trace the client, gpio and delay mocks all write to
#[derive(Default)]
pub(crate) struct MockBus {
    trace: Trace,
}

impl MockBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn client(&self) -> MockClient {
        MockClient {
            functionality: I2cFuncFlags::I2C
                | I2cFuncFlags::SMBUS_BYTE_DATA
                | I2cFuncFlags::SMBUS_I2C_BLOCK,
            regs: [Ok(0); 256],
            name: None,
            trace: self.trace.clone(),
        }
    }

    pub(crate) fn gpio(&self) -> MockGpio {
        MockGpio {
            fail: None,
            trace: self.trace.clone(),
        }
    }

    pub(crate) fn delay(&self) -> MockDelay {
        MockDelay {
            trace: self.trace.clone(),
        }
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.trace.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.trace.borrow_mut().clear();
    }
}

pub(crate) struct MockClient {
    pub(crate) functionality: I2cFuncFlags,
    regs: [Result<u8>; 256],
    /// When set, logs go to the trace as `"<name>: <msg>"` instead of `log`
    pub(crate) name: Option<String>,
    trace: Trace,
}

impl MockClient {
    pub(crate) fn set_reg(&mut self, reg: u8, val: u8) {
        self.regs[usize::from(reg)] = Ok(val);
    }

    pub(crate) fn fail_reg(&mut self, reg: u8, errno: Errno) {
        self.regs[usize::from(reg)] = Err(errno);
    }
}

impl SmbusClient for MockClient {
    fn get_functionality(&self) -> I2cFuncFlags {
        self.functionality
    }

    fn read_byte_data(&mut self, command: u8) -> Result<u8> {
        self.trace.borrow_mut().push(Event::Read(command));
        self.regs[usize::from(command)]
    }

    fn dev_log(&self, level: Level, args: fmt::Arguments<'_>) {
        match &self.name {
            Some(name) => self
                .trace
                .borrow_mut()
                .push(Event::Log(level, format!("{name}: {args}"))),
            None => log::log!(level, "{}", args),
        }
    }
}

pub(crate) struct MockGpio {
    pub(crate) fail: Option<Errno>,
    trace: Trace,
}

impl GpioConsumer for MockGpio {
    type Desc = MockDesc;

    fn get(&mut self, con_id: &str, flags: GpiodFlags) -> Result<MockDesc> {
        if let Some(errno) = self.fail {
            return Err(errno);
        }
        self.trace
            .borrow_mut()
            .push(Event::Acquire(con_id.to_string(), flags));
        Ok(MockDesc {
            trace: self.trace.clone(),
        })
    }
}

pub(crate) struct MockDesc {
    trace: Trace,
}

impl GpioDesc for MockDesc {
    fn set_value_cansleep(&mut self, value: bool) {
        self.trace.borrow_mut().push(Event::Set(value));
    }
}

impl Drop for MockDesc {
    fn drop(&mut self) {
        self.trace.borrow_mut().push(Event::Release);
    }
}

pub(crate) struct MockDelay {
    trace: Trace,
}

impl DelayMs for MockDelay {
    fn msleep(&mut self, ms: u32) {
        self.trace.borrow_mut().push(Event::Sleep(ms));
    }
}
