use std::io::Write;

use log::info;

use crate::bitball::{BitBallInput, BitBallState};
use crate::mainloop::{Mainloop, MainloopBuilder};
use crate::screen::{render_page, Screen, TextScreen};
use crate::Result;

/// Applies a fixed list of inputs, then draws the page once.
pub struct ScriptedMainloop<W: Write> {
    inputs: Vec<BitBallInput>,
    screen: TextScreen<W>,
}

pub struct ScriptedMainloopBuilder<W: Write> {
    pub inputs: Vec<BitBallInput>,
    pub writer: W,
}

impl<W: Write> MainloopBuilder for ScriptedMainloopBuilder<W> {
    type Target = ScriptedMainloop<W>;

    fn init(self) -> Result<Self::Target> {
        Ok(ScriptedMainloop {
            inputs: self.inputs,
            screen: TextScreen::new(self.writer),
        })
    }
}

impl<W: Write> ScriptedMainloop<W> {
    pub fn into_writer(self) -> W {
        self.screen.into_inner()
    }
}

impl<W: Write> Mainloop for ScriptedMainloop<W> {
    fn mainloop(&mut self, page: &mut BitBallState) -> Result<()> {
        info!("replaying {} inputs", self.inputs.len());
        for input in self.inputs.drain(..) {
            page.handle_input(input)?;
        }
        self.screen.draw(&render_page(page, None))
    }
}
