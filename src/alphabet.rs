/// The closed set of symbols the ciphers substitute over.
pub struct Alphabet;

impl Alphabet {
    pub const LETTERS: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];

    pub const SIZE: usize = Self::LETTERS.len();

    /// Symbol at `index`. Callers reduce the index modulo [`Alphabet::SIZE`] first.
    pub fn letter(index: usize) -> char {
        Self::LETTERS[index]
    }

    /// Position of `ch`, found by linear scan. `None` for symbols outside the alphabet.
    pub fn position(ch: char) -> Option<usize> {
        Self::LETTERS.iter().position(|&l| l == ch)
    }
}
