mod frame_loop;
mod icon;
mod modal;

pub use frame_loop::{CancelToken, FrameLoop};
pub use icon::{Icon, SolidIcon};
pub use modal::Modal;
