use rand::Rng;

use super::expression::Expr;

/// Seed vocabulary for the initial population and pool refills: character
/// classes, escaped metacharacters, common punctuation, digits and letters.
/// Every token must compile on its own as a pattern.
pub const BASIC_VOCABULARY: &[&str] = &[
    "[a-z]", "[A-Z]", "[0-9]", "\\?", "\\t", ".",
    "\\n", "\\\\", ":", "<", ">", "#", "%", "~", "@", "=", "\\*", " ",
    "\\+", "\\-", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "a", "A", "b", "B", "c", "C", "d", "D", "e", "E", "f", "F", "g",
    "G", "h", "H", "i", "I", "j", "J", "k", "K", "l", "L", "m", "M",
    "n", "N", "o", "O", "p", "P", "q", "Q", "r", "R", "s", "S", "t",
    "T", "u", "U", "v", "V", "w", "W", "x", "X", "y", "Y", "z", "Z",
];

/// Uniform pick from the basic vocabulary as a single-atom expression.
pub fn random_atom<R: Rng>(rng: &mut R) -> Expr {
    Expr::atom(BASIC_VOCABULARY[rng.gen_range(0..BASIC_VOCABULARY.len())])
}
