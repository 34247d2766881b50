use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// `Ifc` and everything up to the next double quote
    static ref IFC_TOKEN: Regex = Regex::new(r#"(Ifc.+?)""#).unwrap();
}

/// Maps upper-cased entity names to their canonical spelling.
///
/// This is a purely lexical index over the schema text: every `Ifc...` token terminated by a
/// double quote is recorded, including tokens that are not type declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityNameIndex(IndexMap<String, String>);

impl EntityNameIndex {
    /// Scans `text` line by line. The first spelling of a name wins.
    pub fn build(text: &str) -> Self {
        let mut index = Self::default();
        for line in text.lines() {
            for token in IFC_TOKEN.captures_iter(line) {
                index.insert(&token[1]);
            }
        }
        index
    }

    fn insert(&mut self, canonical: &str) {
        self.0
            .entry(canonical.to_uppercase())
            .or_insert_with(|| canonical.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
