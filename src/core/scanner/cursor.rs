/// Index-based cursor over the lines of one file.
///
/// `line_number` is the 1-based number of the most recently consumed line
/// (0 before anything has been read). `unread` steps back exactly one line and
/// can swap in a replacement text for it, which is how the scan loop re-presents
/// a whitespace-stripped opener to the body parser.
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    replaced: Option<(usize, &'a str)>,
}

impl<'a> LineCursor<'a> {
    /// Split on `\n`, accepting `\r\n` endings. Trailing empty lines are
    /// dropped.
    pub fn new(content: &'a str) -> Self {
        let mut lines: Vec<&'a str> = content.lines().collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        Self {
            lines,
            pos: 0,
            replaced: None,
        }
    }

    pub fn line_number(&self) -> usize {
        self.pos
    }

    pub fn next_line(&mut self) -> Option<&'a str> {
        let index = self.pos;
        let line = match self.replaced {
            Some((at, text)) if at == index => text,
            _ => *self.lines.get(index)?,
        };
        self.pos += 1;
        Some(line)
    }

    /// Peek at the next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        match self.replaced {
            Some((at, text)) if at == self.pos => Some(text),
            _ => self.lines.get(self.pos).copied(),
        }
    }

    /// Return the last consumed line to the cursor as `line`.
    pub fn unread(&mut self, line: &'a str) {
        debug_assert!(self.pos > 0, "unread before any line was consumed");
        self.pos = self.pos.saturating_sub(1);
        self.replaced = Some((self.pos, line));
    }
}
