//! The linked-elements collaborator seam.
//!
//! The scheduler never creates or destroys elements; it only toggles class
//! membership through these traits. Both operations are idempotent, so
//! multiple schedulers may target overlapping element sets without locking.

/// A UI element handle supporting named-class membership.
pub trait ClassList {
    /// Add a class. Adding an already-present class is a no-op.
    fn add_class(&mut self, class: &str);

    /// Remove a class. Removing an absent class is a no-op.
    fn remove_class(&mut self, class: &str);
}

/// A collection of zero or more linked element handles.
///
/// Implemented by whatever the surrounding framework hands back; a plain
/// `Vec` of class lists works out of the box.
pub trait LinkedElements {
    /// Number of bound elements.
    fn len(&self) -> usize;

    /// Whether no elements are bound.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke `f` once for each bound element.
    fn for_each(&mut self, f: &mut dyn FnMut(&mut dyn ClassList));
}

impl<T: ClassList> LinkedElements for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn for_each(&mut self, f: &mut dyn FnMut(&mut dyn ClassList)) {
        for element in self.iter_mut() {
            f(element);
        }
    }
}

/// An ordered, idempotent set of class names.
///
/// The crate's stock element implementation, used by the demo and as a model
/// for framework bindings. Order of first insertion is preserved so class
/// lists read back deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    /// Create an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Number of classes present.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no classes are present.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The classes in first-insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl ClassList for ClassSet {
    fn add_class(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut set = ClassSet::new();
        set.add_class("Opacity0");
        set.add_class("Opacity0");
        assert_eq!(set.len(), 1);
        assert!(set.contains("Opacity0"));
    }

    #[test]
    fn test_remove_absent_is_a_noop() {
        let mut set = ClassSet::new();
        set.remove_class("TransitionBase3");
        assert!(set.is_empty());

        set.add_class("TransitionBase3");
        set.remove_class("TransitionBase3");
        set.remove_class("TransitionBase3");
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = ClassSet::new();
        set.add_class("Opacity0");
        set.add_class("TranslateLeft");
        set.add_class("TransitionBase5");
        assert_eq!(set.classes(), ["Opacity0", "TranslateLeft", "TransitionBase5"]);
    }

    #[test]
    fn test_vec_of_class_sets_is_linked_elements() {
        let mut elements = vec![ClassSet::new(), ClassSet::new()];
        assert_eq!(LinkedElements::len(&elements), 2);

        elements.for_each(&mut |el| el.add_class("Opacity0"));
        assert!(elements.iter().all(|el| el.contains("Opacity0")));
    }
}
