use std::sync::{Arc, Mutex, MutexGuard};

use super::history::NavHistory;

/// Page state written by `wry` callbacks and read by [`WryView`](super::WryView).
#[derive(Debug, Default)]
pub struct PageState {
    pub title: String,
    pub history: NavHistory,
}

impl PageState {
    /// Origin of the committed document, if any.
    pub fn origin(&self) -> Option<String> {
        let current = self.history.current()?;
        let url = url::Url::parse(current).ok()?;
        Some(url.origin().ascii_serialization())
    }
}

/// Shared handle to a [`PageState`].
#[derive(Debug, Clone, Default)]
pub struct SharedPage(Arc<Mutex<PageState>>);

impl SharedPage {
    pub fn lock(&self) -> MutexGuard<'_, PageState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_of_committed_page() {
        let page = SharedPage::default();
        assert_eq!(page.lock().origin(), None);

        page.lock().history.commit("https://mail.example.com:8443/inbox?x=1");
        assert_eq!(
            page.lock().origin().as_deref(),
            Some("https://mail.example.com:8443")
        );
    }

    #[test]
    fn opaque_origin_for_data_urls() {
        let page = SharedPage::default();
        page.lock().history.commit("data:text/html,hi");
        assert_eq!(page.lock().origin().as_deref(), Some("null"));
    }

    #[test]
    fn clones_share_state() {
        let page = SharedPage::default();
        let other = page.clone();
        other.lock().title = "Inbox".into();
        assert_eq!(page.lock().title, "Inbox");
    }
}
