use super::ViewModel;

impl ViewModel {
    /// Sole mutation entry point for the active node. Selecting the
    /// already-active id toggles back to no selection; anything else
    /// replaces it. Stale ids are accepted; downstream consumers fall
    /// back to their unfiltered behavior for them.
    pub(in crate::app) fn select(&mut self, id: Option<String>) {
        if id.is_some() && id == self.selected {
            self.selected = None;
        } else {
            self.selected = id;
        }
    }
}
