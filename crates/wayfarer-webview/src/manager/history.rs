//! Back/forward bookkeeping for a content view.
//!
//! The native webviews do not expose their session history, so it is
//! mirrored here from committed loads and same-document navigations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
}

#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    index: usize,
    pending: Option<Traversal>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any document has committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Mark that the next commit is the result of `history.back()`.
    pub fn begin_back(&mut self) {
        if self.can_go_back() {
            self.pending = Some(Traversal::Back);
        }
    }

    pub fn begin_forward(&mut self) {
        if self.can_go_forward() {
            self.pending = Some(Traversal::Forward);
        }
    }

    /// Record that `url` is now showing.
    pub fn commit(&mut self, url: &str) {
        match self.pending.take() {
            Some(Traversal::Back) if self.can_go_back() => {
                self.index -= 1;
                self.overwrite(url);
            }
            Some(Traversal::Forward) if self.can_go_forward() => {
                self.index += 1;
                self.overwrite(url);
            }
            _ => {
                if self.current() == Some(url) {
                    return;
                }
                // A page-driven back or forward lands on a neighbouring entry.
                if self.step_to_neighbour(url) {
                    return;
                }
                self.push(url);
            }
        }
    }

    /// Record a `popstate`: the page moved along its own history, possibly
    /// several entries at once. Unknown targets are treated as new entries.
    pub fn traverse(&mut self, url: &str) {
        if self.pending.is_some() || self.current() == Some(url) {
            self.commit(url);
            return;
        }
        let nearest = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.as_str() == url)
            .min_by_key(|(i, _)| i.abs_diff(self.index))
            .map(|(i, _)| i);
        match nearest {
            Some(i) => self.index = i,
            None => self.push(url),
        }
    }

    /// Rewrite the current entry (`history.replaceState`).
    pub fn replace(&mut self, url: &str) {
        if self.entries.is_empty() {
            self.commit(url);
        } else {
            self.overwrite(url);
        }
    }

    fn step_to_neighbour(&mut self, url: &str) -> bool {
        if self.can_go_back() && self.entries[self.index - 1] == url {
            self.index -= 1;
            true
        } else if self.can_go_forward() && self.entries[self.index + 1] == url {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn push(&mut self, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    fn overwrite(&mut self, url: &str) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            if entry != url {
                *entry = url.to_string();
            }
        }
    }
}
