//! Input dispatch: clicks, wheel and resize turned into carousel moves and
//! playback changes.

pub mod dispatcher;
pub mod messages;
pub mod resize;

pub use dispatcher::{edge_page_target, page_target};
pub use messages::{Direction, SectionEvent};
pub use resize::ResizeCoalescer;
