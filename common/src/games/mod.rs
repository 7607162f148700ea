mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::FrameBroadcaster;
pub use session_rng::SessionRng;
