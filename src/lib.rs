mod error;

pub mod bit_field;
pub mod bitball;
pub mod mainloop;
pub mod mode;
pub mod screen;
pub mod scripted;
pub mod terminal;

pub use bit_field::{BitField, BitVector16};
pub use bitball::{BitBallInput, BitBallState};
pub use error::{Error, Result};
pub use mode::DisplayMode;
