use super::{Animation, DemoKind, TickContext};
use crate::editor::{Editor, Extent, KeyIntent, Redraw};
use crate::grid::SegmentGrid;

/// An editable display: key intents go to an [`Editor`] that paints into
/// this animation's grid. Its only timers are the cursor blink.
#[derive(Debug)]
pub struct Typewriter {
    grid: SegmentGrid,
    editor: Editor,
}

impl Typewriter {
    pub fn new(grid: SegmentGrid) -> Self {
        let editor = Editor::new(Extent::new(grid.rows(), grid.cols()), grid.foreground());
        Self { grid, editor }
    }

    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Feed text through the key path, one intent per character.
    ///
    /// `\n` presses Enter; `\r` is skipped.
    pub fn type_text(&mut self, text: &str, now_ms: u64) {
        for ch in text.chars() {
            let intent = match ch {
                '\n' => KeyIntent::Enter,
                '\r' => continue,
                ch => KeyIntent::Char(ch),
            };
            self.editor.handle_key(intent, &mut self.grid, now_ms);
        }
    }
}

impl Animation for Typewriter {
    fn kind(&self) -> DemoKind {
        DemoKind::Typewriter
    }

    fn grid(&self) -> &SegmentGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut SegmentGrid {
        &mut self.grid
    }

    fn start(&mut self, _ctx: &TickContext) {
        self.editor.set_color(self.grid.foreground());
        self.editor.repaint_all(&mut self.grid);
    }

    fn poll(&mut self, ctx: &TickContext) -> bool {
        self.editor.set_color(self.grid.foreground());
        self.editor.poll_blink(&mut self.grid, ctx.now_ms)
    }

    fn next_deadline(&self) -> Option<u64> {
        self.editor.next_deadline()
    }

    fn handle_key(&mut self, intent: KeyIntent, now_ms: u64) -> bool {
        self.editor.set_color(self.grid.foreground());
        self.editor.handle_key(intent, &mut self.grid, now_ms) != Redraw::None
    }

    fn set_focused(&mut self, focused: bool, now_ms: u64) {
        self.editor.set_focused(focused, &mut self.grid, now_ms);
    }

    fn status(&self) -> String {
        let view = self.editor.view();
        let cursor = view.cursor();
        let offset = view.offset();
        format!(
            "typewriter {}x{}  cursor {},{}  offset {},{}  {}",
            self.grid.rows(),
            self.grid.cols(),
            cursor.row,
            cursor.col,
            offset.row,
            offset.col,
            if view.is_insert_mode() { "INS" } else { "OVR" }
        )
    }
}
