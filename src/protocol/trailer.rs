/// An ordered set of trailer fields.
///
/// Trailers are header-like `key: value` pairs sent after the terminal zero
/// chunk. Insertion order is preserved so that echoing a decoded stream
/// reproduces the original wire order. Inserting a key that is already
/// present replaces the earlier value in place (last-write-wins), keeping
/// the key's original position. Name comparison is ASCII-case-insensitive,
/// matching HTTP field-name semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailers {
    fields: Vec<(String, String)>,
}

impl Trailers {
    /// Creates an empty trailer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, overwriting the value of an existing field with the
    /// same (case-insensitive) name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Looks up a field value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Iterates the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Trailers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut trailers = Trailers::new();
        for (name, value) in iter {
            trailers.insert(name, value);
        }
        trailers
    }
}
