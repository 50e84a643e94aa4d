use crate::bitball::BitBallState;
use crate::Result;

pub trait Mainloop {
    /// Feeds inputs into the page and redraws it until the host is done.
    fn mainloop(&mut self, page: &mut BitBallState) -> Result<()>;
}

pub trait MainloopBuilder {
    type Target: Mainloop;
    fn init(self) -> Result<Self::Target>;
}
