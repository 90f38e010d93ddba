/// Where every balanced `open`/`close` group of a string ends.
///
/// Built in one pass with a stack, so finding the end of a group is a lookup
/// instead of a rescan. Openers that never close have no entry.
pub struct GroupIndex {
    close_of: Vec<Option<usize>>,
}

impl GroupIndex {
    pub fn build(s: &str, open: u8, close: u8) -> Self {
        let bytes = s.as_bytes();
        let mut close_of = vec![None; bytes.len()];
        let mut stack = Vec::new();

        for (i, &b) in bytes.iter().enumerate() {
            if b == open {
                stack.push(i);
            } else if b == close
                && let Some(opener) = stack.pop()
            {
                close_of[opener] = Some(i);
            }
        }

        Self { close_of }
    }

    /// Byte index of the closer matching the opener at `open_at`.
    pub fn close_of(&self, open_at: usize) -> Option<usize> {
        self.close_of.get(open_at).copied().flatten()
    }
}

/// A byte cursor over a string slice for left-to-right inline scanning.
///
/// Only ever stops on ASCII syntax bytes, so any index it reports at a
/// successful match is a valid `char` boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes the group opened at the current position.
    ///
    /// Returns the text between the outer delimiters and leaves the cursor
    /// just past the closing byte. Returns `None` (cursor untouched) when no
    /// group of `groups` opens here.
    pub fn take_balanced(&mut self, groups: &GroupIndex) -> Option<&'a str> {
        let close = groups.close_of(self.i)?;
        let inner = &self.s[self.i + 1..close];
        self.i = close + 1;
        Some(inner)
    }
}
