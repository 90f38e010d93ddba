use std::fmt;

/// Bracket syntax shared by links and images: `[label](target)`.
pub struct Reference;

impl Reference {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
}

/// `![alt](url)`
pub struct Image;

impl Image {
    /// Marker that turns a link into an image.
    pub const PREFIX: u8 = b'!';
}

/// Which of the two reference constructs a scan is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Image,
    Link,
}

impl ReferenceKind {
    /// Rebuilds the exact source text of a reference from its parts.
    pub fn literal(self, label: &str, target: &str) -> String {
        match self {
            ReferenceKind::Image => format!("![{label}]({target})"),
            ReferenceKind::Link => format!("[{label}]({target})"),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Image => f.write_str("image"),
            ReferenceKind::Link => f.write_str("link"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_round_trips_syntax() {
        assert_eq!(
            ReferenceKind::Image.literal("alt", "/a.png"),
            "![alt](/a.png)"
        );
        assert_eq!(
            ReferenceKind::Link.literal("home", "https://boot.dev"),
            "[home](https://boot.dev)"
        );
    }
}
