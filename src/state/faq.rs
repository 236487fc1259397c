#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// Expanded/collapsed flags for the FAQ accordion.
///
/// Entries toggle independently; expanding one never collapses another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Vec<bool>,
}

impl FaqState {
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one entry. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = !*flag;
        }
    }
}
