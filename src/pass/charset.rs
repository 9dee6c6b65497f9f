//! Character classes and pool building for password generation.

const DIGITS: &[u8] = b"0123456789";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const SPECIAL: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Numbers,
    Uppercase,
    Lowercase,
    Special,
}

impl CharClass {
    /// Fixed class order used for pool building and diversity draws.
    pub const ALL: [CharClass; 4] = [
        CharClass::Numbers,
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Numbers => DIGITS,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Special => SPECIAL,
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Numbers => "numbers",
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Special => "special",
        }
    }
}

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterTypeSet {
    pub numbers: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub special: bool,
}

impl CharacterTypeSet {
    pub const fn all() -> Self {
        Self {
            numbers: true,
            uppercase: true,
            lowercase: true,
            special: true,
        }
    }

    #[cfg(test)]
    pub const fn none() -> Self {
        Self {
            numbers: false,
            uppercase: false,
            lowercase: false,
            special: false,
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Numbers => self.numbers,
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Special => self.special,
        }
    }

    /// Enabled classes in fixed order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    pub fn count(&self) -> usize {
        self.enabled().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for CharacterTypeSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Build the character pool from the enabled classes.
pub fn build(types: &CharacterTypeSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(types));
    for class in types.enabled() {
        chars.extend_from_slice(class.chars());
    }
    chars
}

/// Pool size for the enabled classes (for entropy display).
pub fn size(types: &CharacterTypeSet) -> usize {
    types.enabled().map(|c| c.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_follows_fixed_class_order() {
        let pool = build(&CharacterTypeSet::all());
        assert_eq!(pool.len(), 94);
        assert!(pool.starts_with(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabc"));
        assert!(pool.ends_with(b"{|}~"));
        assert_eq!(size(&CharacterTypeSet::all()), 94);
    }

    #[test]
    fn pool_skips_disabled_classes() {
        let types = CharacterTypeSet {
            numbers: true,
            uppercase: false,
            lowercase: true,
            special: false,
        };
        let pool = build(&types);
        assert_eq!(pool, b"0123456789abcdefghijklmnopqrstuvwxyz".to_vec());
        assert_eq!(types.count(), 2);
        assert_eq!(
            types.enabled().collect::<Vec<_>>(),
            vec![CharClass::Numbers, CharClass::Lowercase]
        );
    }

    #[test]
    fn empty_set_has_empty_pool() {
        let types = CharacterTypeSet::none();
        assert!(types.is_empty());
        assert!(build(&types).is_empty());
        assert_eq!(size(&types), 0);
    }

    #[test]
    fn special_is_ascii_punctuation() {
        let punct: Vec<u8> = (0u8..128).filter(u8::is_ascii_punctuation).collect();
        assert_eq!(CharClass::Special.chars(), punct.as_slice());
        assert_eq!(punct.len(), 32);
    }

    #[test]
    fn classes_are_disjoint() {
        for a in CharClass::ALL {
            for b in CharClass::ALL {
                if a == b {
                    continue;
                }
                assert!(a.chars().iter().all(|&c| !b.contains(c as char)));
            }
        }
    }

    #[test]
    fn contains_rejects_non_ascii() {
        assert!(!CharClass::Lowercase.contains('é'));
        assert!(CharClass::Numbers.contains('7'));
        assert!(!CharClass::Numbers.contains('a'));
    }
}
