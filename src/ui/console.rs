#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Info,
    /// The step still ran; shown apart from hard errors.
    Warning,
    Error,
}

pub struct ConsoleLine {
    pub text: String,
    pub kind: LineKind,
}

impl ConsoleLine {
    pub fn info<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), kind: LineKind::Info }
    }

    pub fn warning<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), kind: LineKind::Warning }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), kind: LineKind::Error }
    }
}

#[derive(Default)]
pub struct Console {
    /// Lines to be rendered on screen
    pub lines: Vec<ConsoleLine>,
    /// Scroll offset from the bottom (0 = follow latest)
    pub scroll: usize,
}

impl Console {
    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.push(ConsoleLine::info(line));
    }

    pub fn push(&mut self, line: ConsoleLine) {
        self.lines.push(line);
        self.scroll = 0;
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = ConsoleLine>) {
        self.lines.extend(lines);
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.scroll = (self.scroll + by).min(self.lines.len());
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }
}
