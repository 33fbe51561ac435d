//! Low-energy timer interface trait
//!
//! This module defines the LETIMER register access interface that platform
//! implementations must provide, together with the configuration types the
//! timer is initialized with.

/// Route register bit layout
///
/// The route register selects which physical pin each timer output module
/// drives. The location field is shared by both modules: pins only pair up
/// across modules when their locations coincide.
pub mod route {
    /// Output 0 pin enable
    pub const OUT0_PEN: u32 = 1 << 0;
    /// Output 1 pin enable
    pub const OUT1_PEN: u32 = 1 << 1;
    /// Mask retaining only the two output-enable bits
    pub const OUT_PEN_MASK: u32 = OUT0_PEN | OUT1_PEN;
    /// Bit offset of the location-select field
    pub const LOCATION_SHIFT: u32 = 8;

    /// Location-select field value for `loc`
    pub const fn location(loc: u8) -> u32 {
        (loc as u32) << LOCATION_SHIFT
    }
}

/// Timer output module
///
/// The LETIMER drives two independent outputs. Each routable pin is wired to
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum OutputModule {
    Out0,
    Out1,
}

impl OutputModule {
    /// Route-register enable bit for this module's output
    pub fn pen_bit(self) -> u32 {
        match self {
            OutputModule::Out0 => route::OUT0_PEN,
            OutputModule::Out1 => route::OUT1_PEN,
        }
    }

    /// Index of this module's repeat register
    pub fn index(self) -> usize {
        match self {
            OutputModule::Out0 => 0,
            OutputModule::Out1 => 1,
        }
    }
}

/// Compare register channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum CompareChannel {
    Comp0,
    Comp1,
}

impl CompareChannel {
    /// Index of this channel's compare register
    pub fn index(self) -> usize {
        match self {
            CompareChannel::Comp0 => 0,
            CompareChannel::Comp1 => 1,
        }
    }
}

/// Action applied to a timer output when the counter underflows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum UnderflowAction {
    /// Output unchanged
    None,
    /// Invert the output
    Toggle,
    /// Drive the output active for one low-frequency clock cycle
    Pulse,
    /// PWM output using the second compare channel as the duty point
    Pwm,
}

/// Repeat counting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum RepeatMode {
    /// Count until explicitly stopped
    Free,
    /// Count while the repeat register is non-zero, decrementing it
    OneShot,
    /// As one-shot, reloading the repeat register from its buffer
    Buffered,
    /// Both repeat registers count down, stop when either reaches zero
    Double,
}

/// Timer initialization configuration
///
/// Mirrors the hardware control register fields. `Default` starts the counter
/// immediately with both outputs idle; drivers construct the configuration
/// they need explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub struct LeTimerConfig {
    /// Start counting as soon as initialization completes
    pub enable: bool,
    /// Keep counting while the CPU is halted by a debugger
    pub debug_run: bool,
    /// Start counting on RTC compare-0 match
    pub rtc_comp0_enable: bool,
    /// Start counting on RTC compare-1 match
    pub rtc_comp1_enable: bool,
    /// Reload the counter from compare channel 0 on underflow (COMP0 is the top value)
    pub comp0_top: bool,
    /// Load compare channel 1 into channel 0 when repeat register 0 reaches zero
    pub buf_top: bool,
    /// Idle level of output 0
    pub out0_polarity: bool,
    /// Idle level of output 1
    pub out1_polarity: bool,
    /// Underflow action on output 0
    pub underflow_action0: UnderflowAction,
    /// Underflow action on output 1
    pub underflow_action1: UnderflowAction,
    /// Repeat counting mode
    pub repeat_mode: RepeatMode,
}

impl Default for LeTimerConfig {
    fn default() -> Self {
        Self {
            enable: true,
            debug_run: false,
            rtc_comp0_enable: false,
            rtc_comp1_enable: false,
            comp0_top: false,
            buf_top: false,
            out0_polarity: false,
            out1_polarity: false,
            underflow_action0: UnderflowAction::None,
            underflow_action1: UnderflowAction::None,
            repeat_mode: RepeatMode::Free,
        }
    }
}

/// Low-energy timer interface trait
///
/// Platform implementations must provide this interface for LETIMER register
/// access. All operations are plain register writes with fixed contracts;
/// none of them can fail from the caller's perspective.
///
/// # Safety Invariants
///
/// - The timer clock must be enabled before any call
/// - No concurrent caller mutates the same timer block (the route
///   read-modify-write performed by consumers is not atomic)
pub trait LeTimerInterface {
    /// Read the current route register value
    fn route(&self) -> u32;

    /// Write the route register
    fn set_route(&mut self, route: u32);

    /// Write a compare register
    ///
    /// In toggle mode with `comp0_top` set, channel 0 holds the tick count the
    /// counter reloads from on underflow.
    fn set_compare(&mut self, channel: CompareChannel, ticks: u16);

    /// Write a module's repeat register
    ///
    /// The hardware only toggles a module's output while its repeat register
    /// is non-zero, even in free-running mode.
    fn set_repeat(&mut self, module: OutputModule, count: u8);

    /// Apply a configuration and (if `config.enable`) start the counter
    fn init_and_start(&mut self, config: &LeTimerConfig);
}
