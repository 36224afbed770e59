use indexmap::IndexMap;

/// A single `key,value` line of an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    pub value: String,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Messages of one locale, kept in insertion order.
///
/// Adding a key that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    locale: String,
    messages: IndexMap<String, String>,
}

impl Catalogue {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: IndexMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn add(&mut self, entry: MessageEntry) {
        self.messages.insert(entry.key, entry.value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Extend<MessageEntry> for Catalogue {
    fn extend<I: IntoIterator<Item = MessageEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.add(entry);
        }
    }
}
