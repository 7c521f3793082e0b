/// Ordered, last-wins attribute map (spec §3, §9).
///
/// Insertion order is preserved at each name's *first* occurrence; a
/// later attribute with the same name updates the existing slot's
/// value in place rather than appending a duplicate. A `Vec` is used
/// rather than a `HashMap` because real tag attribute counts are tiny
/// and iteration order matters for faithful reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// An empty attribute map.
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    /// Inserts `name` = `value`. If `name` was already present, its
    /// value is overwritten in place; otherwise the pair is appended.
    pub fn insert(&mut self, name: String, value: String) {
        if let Some(existing) = self.0.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Looks up the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct attribute names held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}
