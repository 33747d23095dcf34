//! Frame projection, frame diffing and the terminal render consumer.

pub mod diff;
pub mod frame;
pub mod sink;
pub mod terminal;
pub mod tracker;

pub use diff::{diff, FrameDiff};
pub use frame::{ChatView, FolderView, Frame, MessageView, UserView};
pub use sink::RenderSink;
pub use terminal::{Layout, TerminalRenderer};
pub use tracker::FrameTracker;
