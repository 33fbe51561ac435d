//! EFM32GG LETIMER0 register access
//!
//! The LETIMER sits in the low-frequency clock domain: writes to CTRL, CMD,
//! the compare registers and the repeat registers are synchronized across the
//! domain boundary, and a second write to a register whose first write is
//! still in flight would be lost. Every such write therefore waits on the
//! matching SYNCBUSY bit first. ROUTE is in the high-frequency domain and
//! needs no synchronization.

use core::ptr::{read_volatile, write_volatile};

use crate::platform::traits::{
    CompareChannel, LeTimerConfig, LeTimerInterface, OutputModule, RepeatMode, UnderflowAction,
};

const LETIMER0_BASE: u32 = 0x4004_6000;

const LETIMER_CTRL: *mut u32 = (LETIMER0_BASE + 0x000) as *mut u32;
const LETIMER_CMD: *mut u32 = (LETIMER0_BASE + 0x004) as *mut u32;
const LETIMER_COMP0: *mut u32 = (LETIMER0_BASE + 0x010) as *mut u32;
const LETIMER_COMP1: *mut u32 = (LETIMER0_BASE + 0x014) as *mut u32;
const LETIMER_REP0: *mut u32 = (LETIMER0_BASE + 0x018) as *mut u32;
const LETIMER_REP1: *mut u32 = (LETIMER0_BASE + 0x01C) as *mut u32;
const LETIMER_SYNCBUSY: *const u32 = (LETIMER0_BASE + 0x034) as *const u32;
const LETIMER_ROUTE: *mut u32 = (LETIMER0_BASE + 0x040) as *mut u32;

// CTRL fields
const CTRL_REPMODE_SHIFT: u32 = 0;
const CTRL_UFOA0_SHIFT: u32 = 2;
const CTRL_UFOA1_SHIFT: u32 = 4;
const CTRL_OPOL0: u32 = 1 << 6;
const CTRL_OPOL1: u32 = 1 << 7;
const CTRL_BUFTOP: u32 = 1 << 8;
const CTRL_COMP0TOP: u32 = 1 << 9;
const CTRL_RTCC0TEN: u32 = 1 << 10;
const CTRL_RTCC1TEN: u32 = 1 << 11;
const CTRL_DEBUGRUN: u32 = 1 << 12;

const CMD_START: u32 = 1 << 0;

// SYNCBUSY bits, one per synchronized register
const SYNCBUSY_CTRL: u32 = 1 << 0;
const SYNCBUSY_CMD: u32 = 1 << 1;
const SYNCBUSY_COMP0: u32 = 1 << 2;
const SYNCBUSY_COMP1: u32 = 1 << 3;
const SYNCBUSY_REP0: u32 = 1 << 4;
const SYNCBUSY_REP1: u32 = 1 << 5;

fn underflow_bits(action: UnderflowAction) -> u32 {
    match action {
        UnderflowAction::None => 0,
        UnderflowAction::Toggle => 1,
        UnderflowAction::Pulse => 2,
        UnderflowAction::Pwm => 3,
    }
}

fn repeat_mode_bits(mode: RepeatMode) -> u32 {
    match mode {
        RepeatMode::Free => 0,
        RepeatMode::OneShot => 1,
        RepeatMode::Buffered => 2,
        RepeatMode::Double => 3,
    }
}

fn ctrl_bits(config: &LeTimerConfig) -> u32 {
    let mut ctrl = repeat_mode_bits(config.repeat_mode) << CTRL_REPMODE_SHIFT
        | underflow_bits(config.underflow_action0) << CTRL_UFOA0_SHIFT
        | underflow_bits(config.underflow_action1) << CTRL_UFOA1_SHIFT;
    if config.out0_polarity {
        ctrl |= CTRL_OPOL0;
    }
    if config.out1_polarity {
        ctrl |= CTRL_OPOL1;
    }
    if config.buf_top {
        ctrl |= CTRL_BUFTOP;
    }
    if config.comp0_top {
        ctrl |= CTRL_COMP0TOP;
    }
    if config.rtc_comp0_enable {
        ctrl |= CTRL_RTCC0TEN;
    }
    if config.rtc_comp1_enable {
        ctrl |= CTRL_RTCC1TEN;
    }
    if config.debug_run {
        ctrl |= CTRL_DEBUGRUN;
    }
    ctrl
}

/// LETIMER0 register access
///
/// Construct via `Efm32ggPlatform::init()`; the platform owns the register
/// set.
pub struct Efm32ggLeTimer {
    _private: (),
}

impl Efm32ggLeTimer {
    pub(super) fn new() -> Self {
        Self { _private: () }
    }

    /// Wait until the given register's previous write has crossed into the
    /// low-frequency domain
    fn sync(&self, mask: u32) {
        unsafe { while read_volatile(LETIMER_SYNCBUSY) & mask != 0 {} }
    }
}

impl LeTimerInterface for Efm32ggLeTimer {
    fn route(&self) -> u32 {
        unsafe { read_volatile(LETIMER_ROUTE) }
    }

    fn set_route(&mut self, route: u32) {
        unsafe { write_volatile(LETIMER_ROUTE, route) }
    }

    fn set_compare(&mut self, channel: CompareChannel, ticks: u16) {
        let (reg, busy) = match channel {
            CompareChannel::Comp0 => (LETIMER_COMP0, SYNCBUSY_COMP0),
            CompareChannel::Comp1 => (LETIMER_COMP1, SYNCBUSY_COMP1),
        };
        self.sync(busy);
        unsafe { write_volatile(reg, u32::from(ticks)) }
    }

    fn set_repeat(&mut self, module: OutputModule, count: u8) {
        let (reg, busy) = match module {
            OutputModule::Out0 => (LETIMER_REP0, SYNCBUSY_REP0),
            OutputModule::Out1 => (LETIMER_REP1, SYNCBUSY_REP1),
        };
        self.sync(busy);
        unsafe { write_volatile(reg, u32::from(count)) }
    }

    fn init_and_start(&mut self, config: &LeTimerConfig) {
        self.sync(SYNCBUSY_CTRL);
        unsafe { write_volatile(LETIMER_CTRL, ctrl_bits(config)) }

        if config.enable {
            self.sync(SYNCBUSY_CMD);
            unsafe { write_volatile(LETIMER_CMD, CMD_START) }
        }
    }
}
