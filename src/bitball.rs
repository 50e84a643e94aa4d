use log::debug;

use crate::bit_field::BitVector16;
use crate::mode::DisplayMode;
use crate::Result;

/// Inputs the hosting page can receive from a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBallInput {
    ToggleBit(usize),
    SelectMode(DisplayMode),
}

/// Text shown in the values panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub binary: String,
    pub decimal: i32,
    pub hex: String,
}

/// What a single lamp looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lamp {
    pub index: usize,
    pub is_on: bool,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct BitBallState {
    bits: BitVector16,
    mode: DisplayMode,
}

impl BitBallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: DisplayMode) -> Self {
        Self {
            bits: BitVector16::new(),
            mode,
        }
    }

    pub fn bits(&self) -> &BitVector16 {
        &self.bits
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn handle_input(&mut self, input: BitBallInput) -> Result<()> {
        match input {
            BitBallInput::ToggleBit(index) => {
                self.bits.toggle(index)?;
                debug!(
                    "toggled lamp {} -> {:#06x}",
                    index,
                    self.bits.unsigned_value()
                );
            }
            BitBallInput::SelectMode(mode) => {
                debug!("display mode {} -> {}", self.mode, mode);
                self.mode = mode;
            }
        }
        Ok(())
    }

    pub fn readouts(&self) -> Readouts {
        Readouts {
            binary: self.bits.binary_string(),
            decimal: self.bits.display_value(self.mode),
            hex: self.bits.hex_string(),
        }
    }

    /// Lamps in index order. Labels count bit positions from the LSB.
    pub fn lamps(&self) -> Vec<Lamp> {
        let size = self.bits.size();
        self.bits
            .bits()
            .iter()
            .enumerate()
            .map(|(index, is_on)| Lamp {
                index,
                is_on: *is_on,
                label: format!("Bit {} {}", size - 1 - index, if *is_on { "on" } else { "off" }),
            })
            .collect()
    }
}
