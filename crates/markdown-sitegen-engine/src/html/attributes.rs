use super::RenderOptions;

/// HTML attributes in insertion order.
///
/// Setting an existing key replaces its value in place, so the key keeps its
/// original position in the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes as ` key="value"` pairs; empty attributes produce "".
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, &RenderOptions::default());
        out
    }

    pub(crate) fn write_html(&self, out: &mut String, options: &RenderOptions) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            if options.escape_attributes {
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
            } else {
                out.push_str(value);
            }
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (k, v) in iter {
            attributes.insert(k, v);
        }
        attributes
    }
}
