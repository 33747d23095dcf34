use crate::diff::FrameDiff;
use crate::frame::Frame;

/// Consumer of frame diffs. `frame` is the complete state after the diff.
pub trait RenderSink {
    fn render(&mut self, diff: &FrameDiff, frame: &Frame) -> std::io::Result<()>;

    /// The terminal changed size; the next diff will be full.
    fn resize(&mut self, _columns: u16, _rows: u16) -> std::io::Result<()> {
        Ok(())
    }
}
