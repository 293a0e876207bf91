use super::content::{PHOTOS, Photo};

pub const ALL_CATEGORIES: &str = "All";

/// Category filter plus the lightbox over the filtered photos.
///
/// Navigation wraps around at both ends of the filtered list.
#[derive(Debug)]
pub struct Lightbox {
    photos: &'static [Photo],
    category: String,
    index: usize,
    open: bool,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(PHOTOS)
    }
}

impl Lightbox {
    pub fn new(photos: &'static [Photo]) -> Self {
        Self {
            photos,
            category: ALL_CATEGORIES.to_string(),
            index: 0,
            open: false,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Change the filter. An open lightbox is closed since its index no
    /// longer refers to the same photo.
    pub fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.index = 0;
        self.open = false;
    }

    pub fn filtered(&self) -> Vec<&'static Photo> {
        let photos = self.photos;
        if self.category == ALL_CATEGORIES {
            photos.iter().collect()
        } else {
            photos.iter().filter(|p| p.category == self.category).collect()
        }
    }

    /// Open at `index` in the filtered list; out of range is ignored.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.filtered().len() {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&'static Photo> {
        if !self.open {
            return None;
        }
        self.filtered().get(self.index).copied()
    }

    pub fn next(&mut self) -> Option<&'static Photo> {
        let len = self.filtered().len();
        if !self.open || len == 0 {
            return None;
        }
        self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
        self.current()
    }

    pub fn prev(&mut self) -> Option<&'static Photo> {
        let len = self.filtered().len();
        if !self.open || len == 0 {
            return None;
        }
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        self.current()
    }

    /// `"3 of 9"`
    pub fn position(&self) -> Option<String> {
        self.current()
            .map(|_| format!("{} of {}", self.index + 1, self.filtered().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_category() {
        let mut lb = Lightbox::default();
        assert_eq!(lb.filtered().len(), 9);
        lb.select_category("Events");
        let titles: Vec<_> = lb.filtered().iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Annual Convention", "Leadership Summit", "Policy Forum"]);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lb = Lightbox::default();
        lb.select_category("Community");
        assert!(lb.open_at(0));
        assert_eq!(lb.prev().map(|p| p.title), Some("Community Service"));
        assert_eq!(lb.position().as_deref(), Some("3 of 3"));
        assert_eq!(lb.next().map(|p| p.title), Some("Youth Outreach"));
        assert_eq!(lb.position().as_deref(), Some("1 of 3"));
    }

    #[test]
    fn closed_or_empty_lightbox_does_not_move() {
        let mut lb = Lightbox::default();
        assert_eq!(lb.next(), None);
        lb.select_category("Nothing");
        assert!(!lb.open_at(0));
        assert_eq!(lb.prev(), None);
        assert_eq!(lb.position(), None);
    }

    #[test]
    fn changing_category_closes() {
        let mut lb = Lightbox::default();
        lb.open_at(5);
        lb.select_category("Campaigns");
        assert!(!lb.is_open());
        assert_eq!(lb.current(), None);
    }
}
