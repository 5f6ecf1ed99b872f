//! Scene (blit stream) types.
//!
//! Responsibilities:
//! - describe a single textured blit renderer-agnostically
//! - record blits in paint order
//! - define the [`BlitSink`] seam the compositor writes through

mod cmd;
mod list;

pub use cmd::{BlitCmd, BlitOptions};
pub use list::{DrawItem, DrawList};

/// Anything that accepts blits in paint order.
///
/// Implemented by [`DrawList`] (records) and by
/// [`RasterTarget`](crate::render::RasterTarget) (draws immediately).
pub trait BlitSink {
    fn blit(&mut self, cmd: BlitCmd);
}

impl<T: BlitSink + ?Sized> BlitSink for &mut T {
    #[inline]
    fn blit(&mut self, cmd: BlitCmd) {
        (**self).blit(cmd);
    }
}
