//! Buffered sliding window over a line source.

use std::collections::VecDeque;

/// Lines visible at once; the assembler needs two lines of lookahead.
pub const WINDOW_SIZE: usize = 3;

/// A forward-only window of three consecutive lines over a line iterator.
///
/// The window is primed by reading three lines up front, padding with a
/// "no line" sentinel when the source is shorter. [`advance`] drops the
/// oldest line and pulls the next one; once the source is exhausted it
/// reports `false` and leaves the buffered tail untouched so the caller can
/// still read the lines it never consumed. [`skip`] consumes a slot
/// unconditionally, shifting the sentinel in when the source is dry —
/// callers use it to step past lines they already matched as part of a
/// multi-line pattern.
///
/// Single pass, no rewind. Sentinels only ever appear at the tail of the
/// buffer: once the source runs dry every later pull is a sentinel.
///
/// [`advance`]: LineWindow::advance
/// [`skip`]: LineWindow::skip
pub struct LineWindow<I: Iterator<Item = String>> {
    source: I,
    buf: VecDeque<Option<String>>,
}

impl<I: Iterator<Item = String>> LineWindow<I> {
    /// Create a window over `source` and prime the initial three slots.
    pub fn new(mut source: I) -> Self {
        let mut buf = VecDeque::with_capacity(WINDOW_SIZE);
        for _ in 0..WINDOW_SIZE {
            buf.push_back(source.next());
        }
        Self { source, buf }
    }

    /// Slide forward by one line.
    ///
    /// Returns `false` without touching the buffer when the source is
    /// exhausted.
    pub fn advance(&mut self) -> bool {
        match self.source.next() {
            Some(line) => {
                self.buf.pop_front();
                self.buf.push_back(Some(line));
                true
            }
            None => false,
        }
    }

    /// Consume one slot regardless of source state.
    ///
    /// When the source is dry the sentinel is shifted in, marking the slot
    /// as spent so it is not mistaken for unconsumed input later.
    pub fn skip(&mut self) {
        let next = self.source.next();
        self.buf.pop_front();
        self.buf.push_back(next);
    }

    /// Oldest line in the window.
    pub fn first(&self) -> Option<&str> {
        self.line(0)
    }

    pub fn middle(&self) -> Option<&str> {
        self.line(1)
    }

    /// Newest line in the window.
    pub fn last(&self) -> Option<&str> {
        self.line(WINDOW_SIZE - 1)
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.buf.get(idx).and_then(|slot| slot.as_deref())
    }
}
