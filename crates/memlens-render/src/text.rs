//! Capped text accumulation shared by the chain walkers.

/// Marker appended once when output hits the cap.
pub(crate) const ELLIPSIS: &str = "...";

/// Marker for memory the accessor could not read.
pub(crate) const BAD_MEM: &str = "[BAD mem!]";

/// Append-only buffer enforcing a character cap.
///
/// Content is cut at exactly the cap on a character boundary, the
/// ellipsis marker is appended once, and pushes after that are dropped.
/// Walkers check [`CappedText::is_truncated`] at each link, so cyclic
/// chains terminate as soon as the cap is reached.
pub(crate) struct CappedText {
    out: String,
    cap: usize,
    used: usize,
    truncated: bool,
}

impl CappedText {
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            out: String::new(),
            cap,
            used: 0,
            truncated: false,
        }
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        for ch in s.chars() {
            if self.used == self.cap {
                self.mark_truncated();
                return;
            }
            self.out.push(ch);
            self.used += 1;
        }
    }

    pub(crate) fn push(&mut self, ch: char) {
        if self.truncated {
            return;
        }
        if self.used == self.cap {
            self.mark_truncated();
            return;
        }
        self.out.push(ch);
        self.used += 1;
    }

    /// Force truncation, e.g. when a walk runs out of fuel before the
    /// character cap fills up.
    pub(crate) fn mark_truncated(&mut self) {
        if !self.truncated {
            self.truncated = true;
            self.out.push_str(ELLIPSIS);
        }
    }

    pub(crate) fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}
