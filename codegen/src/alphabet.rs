use core::str::FromStr;

use crate::Error;

/// A set of letters naming the components of a vector by position.
///
/// Letter `i` of an alphabet names component `i`. Alphabets are interchangeable: an accessor
/// named in one alphabet and the accessor for the same components named in another alphabet
/// return the same value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Alphabet {
    letters: [char; 4],
}

impl Alphabet {
    /// Positional names, `x`, `y`, `z`, `w`.
    pub const POSITION: Self = Self {
        letters: ['x', 'y', 'z', 'w'],
    };

    /// Color channel names, `r`, `g`, `b`, `a`.
    pub const COLOR: Self = Self {
        letters: ['r', 'g', 'b', 'a'],
    };

    /// Texture coordinate names, `s`, `t`, `p`, `q`, as used by GLSL.
    ///
    /// Not part of the default configuration.
    pub const TEXTURE: Self = Self {
        letters: ['s', 't', 'p', 'q'],
    };

    /// Creates an alphabet from the names of components 0 through 3.
    ///
    /// # Errors
    ///
    /// Returns an error if a letter is not an ASCII lowercase letter or appears twice.
    pub fn new(letters: [char; 4]) -> Result<Self, Error> {
        for (i, &letter) in letters.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(Error::InvalidLetter(letter));
            }
            if letters[..i].contains(&letter) {
                return Err(Error::DuplicateLetter(letter));
            }
        }
        Ok(Self { letters })
    }

    /// Returns the letters of this alphabet, in component order.
    #[must_use]
    pub const fn letters(&self) -> [char; 4] {
        self.letters
    }

    /// Returns the letter naming the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    #[must_use]
    pub const fn letter(&self, index: u8) -> char {
        self.letters[index as usize]
    }
}

/// Parses an alphabet written as its four letters, such as `"xyzw"`.
impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = ['\0'; 4];
        let mut count = 0;
        for letter in s.chars() {
            if let Some(slot) = letters.get_mut(count) {
                *slot = letter;
            }
            count += 1;
        }
        if count != letters.len() {
            return Err(Error::AlphabetLength(count));
        }
        Self::new(letters)
    }
}
