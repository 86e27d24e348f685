//! Single-open disclosure state (FAQ accordion).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn with_open(index: usize) -> Self {
        Self { open: Some(index) }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing whichever item was open. Toggling the open item
    /// closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_is_open() {
        let mut faq = Accordion::with_open(0);
        faq.toggle(2);
        assert!(faq.is_open(2));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut faq = Accordion::with_open(1);
        faq.toggle(1);
        assert_eq!(faq.open(), None);
    }
}
