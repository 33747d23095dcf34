use chatterm_renderer::{Frame, RenderSink};

use super::core::App;

impl App {
    /// Project the current state.
    pub fn frame(&self) -> Frame {
        Frame::project(
            &self.state.model,
            self.listener.pending(),
            self.state.settings.get().separator_offset,
        )
    }

    /// Diff against the last emitted frame and hand any change to `sink`.
    pub fn render(&mut self, sink: &mut impl RenderSink) -> std::io::Result<()> {
        let frame = self.frame();
        let diff = self.tracker.update(&frame);
        if !diff.is_changed() {
            return Ok(());
        }
        sink.render(&diff, &frame)
    }
}
