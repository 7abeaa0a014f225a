use headroom_core::ClassList;
use web_sys::Element;

/// [`ClassList`] over an element's `classList`.
#[derive(Clone, Debug)]
pub struct DomClassList {
    element: Element,
}

impl DomClassList {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ClassList for DomClassList {
    fn add(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            log::warn!("headroom: adding class {:?} failed: {:?}", class, err);
        }
    }

    fn remove(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            log::warn!("headroom: removing class {:?} failed: {:?}", class, err);
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}
