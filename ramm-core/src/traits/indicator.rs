//! Mode indicator LEDs
//!
//! Two outputs show the current mode: the manual indicator is lit in
//! manual mode, the automatic indicator in automatic mode. They are never
//! lit together.

use embedded_hal::digital::OutputPin;

use crate::robot::Mode;

/// Desired state of the two indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorLevels {
    pub manual: bool,
    pub automatic: bool,
}

impl IndicatorLevels {
    /// Both indicators off (before the first mode change)
    pub const OFF: Self = Self {
        manual: false,
        automatic: false,
    };

    /// Levels showing `mode`
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Manual => Self {
                manual: true,
                automatic: false,
            },
            Mode::Automatic => Self {
                manual: false,
                automatic: true,
            },
        }
    }
}

/// Pair of mode indicator outputs
pub struct ModeIndicators<M, A> {
    manual: M,
    automatic: A,
    levels: IndicatorLevels,
}

impl<M, A> ModeIndicators<M, A>
where
    M: OutputPin,
    A: OutputPin<Error = M::Error>,
{
    /// Take ownership of the pins and switch both indicators off
    pub fn new(manual: M, automatic: A) -> Result<Self, M::Error> {
        let mut indicators = Self {
            manual,
            automatic,
            levels: IndicatorLevels::OFF,
        };
        indicators.manual.set_low()?;
        indicators.automatic.set_low()?;
        Ok(indicators)
    }

    /// Current levels
    pub fn levels(&self) -> IndicatorLevels {
        self.levels
    }

    /// Light the indicator for `mode`
    ///
    /// The indicator being switched off is driven first, so both are never
    /// lit at the same time.
    pub fn show(&mut self, mode: Mode) -> Result<(), M::Error> {
        let levels = IndicatorLevels::for_mode(mode);

        if levels.manual {
            self.automatic.set_low()?;
            self.manual.set_high()?;
        } else {
            self.manual.set_low()?;
            self.automatic.set_high()?;
        }

        self.levels = levels;
        Ok(())
    }

    /// Make the indicators match `mode`
    ///
    /// Drives the pins only when the lit indicator differs from `mode`, and
    /// reports whether it did. This also covers the first command after
    /// start-up, which leaves the mode unchanged while both are still off.
    pub fn sync(&mut self, mode: Mode) -> Result<bool, M::Error> {
        if self.levels == IndicatorLevels::for_mode(mode) {
            return Ok(false);
        }
        self.show(mode)?;
        Ok(true)
    }

    /// Give the pins back
    pub fn release(self) -> (M, A) {
        (self.manual, self.automatic)
    }
}
