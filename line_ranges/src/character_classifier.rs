use std::collections::HashMap;

/// Size of the dense table; codes below this never go through the map.
const DENSE_CODES: usize = 256;

/// Associates a value with character codes.  Codes that were never set
/// classify as the default value.
///
/// Codes 0-255 are looked up in a fixed-size table, all others in a map.
pub struct CharacterClassifier<T> {
    dense: [T; DENSE_CODES],
    sparse: HashMap<u32, T>,
    default: T,
}

impl<T: Copy> CharacterClassifier<T> {
    pub fn new(default: T) -> Self {
        Self {
            dense: [default; DENSE_CODES],
            sparse: HashMap::new(),
            default,
        }
    }

    pub fn set(&mut self, code: u32, value: T) {
        match usize::try_from(code).ok().and_then(|c| self.dense.get_mut(c)) {
            Some(slot) => *slot = value,
            None => {
                self.sparse.insert(code, value);
            }
        }
    }

    /// The class of the given character code
    pub fn get(&self, code: u32) -> T {
        match usize::try_from(code).ok().and_then(|c| self.dense.get(c)) {
            Some(value) => *value,
            None => self.sparse.get(&code).copied().unwrap_or(self.default),
        }
    }

    /// Reset every code to the default value
    pub fn clear(&mut self) {
        self.dense.fill(self.default);
        self.sparse.clear();
    }
}

/// A set of character codes
pub struct CharacterSet(CharacterClassifier<bool>);

impl CharacterSet {
    pub fn new() -> Self {
        CharacterSet(CharacterClassifier::new(false))
    }

    pub fn add(&mut self, code: u32) {
        self.0.set(code, true);
    }

    pub fn has(&self, code: u32) -> bool {
        self.0.get(code)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharacterSet::new();
        for c in iter {
            set.add(c.into());
        }
        set
    }
}

/// The characters that end a line
pub fn line_break_set() -> CharacterSet {
    ['\n', '\r'].into_iter().collect()
}
