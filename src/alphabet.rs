#[cfg(test)]
use proptest_derive::Arbitrary;

/// Class of symbols the password alphabet is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum SymbolClass {
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
    /// `0-9`
    Digit,
}

impl SymbolClass {
    pub const ALL: [SymbolClass; 3] = [SymbolClass::Upper, SymbolClass::Lower, SymbolClass::Digit];

    /// Whether `c` belongs to the class.
    pub fn contains(self, c: char) -> bool {
        match self {
            SymbolClass::Upper => c.is_ascii_uppercase(),
            SymbolClass::Lower => c.is_ascii_lowercase(),
            SymbolClass::Digit => c.is_ascii_digit(),
        }
    }

    /// Returns an iterator over every symbol in the class, in ascending order.
    pub fn symbols(self) -> impl Iterator<Item = char> {
        match self {
            SymbolClass::Upper => 'A'..='Z',
            SymbolClass::Lower => 'a'..='z',
            SymbolClass::Digit => '0'..='9',
        }
    }
}

/// Union of all [`SymbolClass`]es.
pub fn password_alphabet() -> impl Iterator<Item = char> {
    SymbolClass::ALL.into_iter().flat_map(SymbolClass::symbols)
}
