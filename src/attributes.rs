//! Free-form attribute lists.
//!
//! Every element carries an [`AttributeList`] for attributes that have no
//! typed field. The list keeps insertion order and allows the same name more
//! than once; [`AttributeList::remove_all`] drops every entry with a name.
//!
//! Element builders own their list outright, so cloning a builder clones the
//! list and the copies never see each other's changes. When several threads
//! really do need to edit one list, wrap it in [`SharedAttributes`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ast::Attribute;

/// Ordered name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    attrs: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, even if the name is already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push(Attribute::new(name, value));
    }

    pub fn push(&mut self, attr: Attribute) {
        self.attrs.push(attr);
    }

    /// Remove every pair with exactly this name.
    pub fn remove_all(&mut self, name: &str) {
        self.attrs.retain(|a| !a.name.is(name));
    }

    /// Value of the first pair with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.is(name))
            .map(|a| a.value.as_str())
    }

    /// Replace the value of the first pair with this name, or append one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.attrs.iter_mut().find(|a| a.name.is(&name)) {
            Some(attr) => attr.value = value.into(),
            None => self.add(name, value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.attrs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Append every pair of `other`, keeping its order.
    pub fn extend(&mut self, other: &AttributeList) {
        self.attrs.extend(other.attrs.iter().cloned());
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttributeList {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.add(name, value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}

/// An attribute list that several owners edit in place.
///
/// Clones share the same storage. `add` and `remove_all` hold the lock for the
/// whole update, so readers see a list either before or after it, never in
/// between.
#[derive(Debug, Clone, Default)]
pub struct SharedAttributes {
    inner: Arc<Mutex<AttributeList>>,
}

impl SharedAttributes {
    pub fn new(list: AttributeList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn add(&self, name: impl Into<String>, value: impl Into<String>) {
        self.lock().add(name, value);
    }

    pub fn remove_all(&self, name: &str) {
        self.lock().remove_all(name);
    }

    /// A copy of the list as it is right now.
    pub fn snapshot(&self) -> AttributeList {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, AttributeList> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn pairs(list: &AttributeList) -> Vec<(String, String)> {
        list.iter()
            .map(|a| (a.name.full_name(), a.value.clone()))
            .collect()
    }

    #[test]
    fn test_add_keeps_duplicates_in_order() {
        let mut list = AttributeList::new();
        list.add("foo", "Foo");
        list.add("foo", "Bar");
        assert_eq!(
            pairs(&list),
            vec![("foo".into(), "Foo".into()), ("foo".into(), "Bar".into())]
        );

        list.remove_all("foo");
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_all_keeps_other_names() {
        let mut list = AttributeList::new();
        list.add("foo", "Foo");
        list.add("bar", "Bar");
        list.remove_all("foo");
        assert_eq!(pairs(&list), vec![("bar".into(), "Bar".into())]);
    }

    #[test]
    fn test_remove_all_missing_name_is_noop() {
        let mut list: AttributeList = [("a", "1"), ("b", "2")].into_iter().collect();
        let before = list.clone();
        list.remove_all("c");
        list.remove_all("A");
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_all_matches_prefixed_names() {
        let mut list = AttributeList::new();
        list.add("xlink:href", "#a");
        list.add("href", "#b");
        list.remove_all("xlink:href");
        assert_eq!(pairs(&list), vec![("href".into(), "#b".into())]);
    }

    #[test]
    fn test_get_and_set() {
        let mut list = AttributeList::new();
        list.add("foo", "1");
        list.add("foo", "2");
        assert_eq!(list.get("foo"), Some("1"));

        list.set("foo", "3");
        list.set("bar", "4");
        assert_eq!(
            pairs(&list),
            vec![
                ("foo".into(), "3".into()),
                ("foo".into(), "2".into()),
                ("bar".into(), "4".into())
            ]
        );
    }

    #[test]
    fn test_clones_are_independent() {
        let mut a = AttributeList::new();
        a.add("foo", "Foo");
        let mut b = a.clone();
        b.add("bar", "Bar");
        a.remove_all("foo");
        assert!(a.is_empty());
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_shared_attributes_from_many_threads() {
        let shared = SharedAttributes::default();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        shared.add(format!("t{t}"), i.to_string());
                        shared.add("scratch", "x");
                        shared.remove_all("scratch");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let list = shared.snapshot();
        assert_eq!(list.len(), 800);
        assert_eq!(list.get("scratch"), None);

        // Each thread's own entries stay in the order it added them.
        for t in 0..8 {
            let name = format!("t{t}");
            let values: Vec<_> = list
                .iter()
                .filter(|a| a.name.is(&name))
                .map(|a| a.value.parse::<u32>().unwrap())
                .collect();
            assert_eq!(values, (0..100).collect::<Vec<_>>());
        }
    }
}
