use std::collections::HashMap;
use std::sync::LazyLock;

/// Letter order used for any length without its own entry.
pub const FALLBACK_ORDER: &str = "ETAOINSHRDLU";

/// Precomputed guessing order for word lengths 1 through 20.
const STANDARD_ORDERS: [&str; 20] = [
    "AI",
    "AOEIUMBH",
    "AEOIUYHBCK",
    "AEOIUYSBF",
    "SEAOIUYH",
    "EAIOUSY",
    "EIAOUS",
    "EIAOU",
    "EIAOU",
    "EIOAU",
    "EIOAD",
    "EIOAF",
    "IEOA",
    "IEO",
    "IEA",
    "IEH",
    "IER",
    "IEA",
    "IEA",
    "IE",
];

static STANDARD: LazyLock<PriorityTable> = LazyLock::new(|| {
    STANDARD_ORDERS
        .iter()
        .enumerate()
        .fold(PriorityTable::new(FALLBACK_ORDER), |table, (i, order)| {
            table.with_order(i + 1, order)
        })
});

/// Maps a word length to the letters worth trying before anything is known
/// about the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    orders: HashMap<usize, Vec<char>>,
    fallback: Vec<char>,
}

impl PriorityTable {
    /// Creates an empty table where every length uses `fallback`.
    pub fn new(fallback: &str) -> Self {
        Self {
            orders: HashMap::new(),
            fallback: normalize(fallback),
        }
    }

    /// The built-in table, shared by every solver that doesn't bring its own.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub fn with_order(mut self, word_length: usize, letters: &str) -> Self {
        self.orders.insert(word_length, normalize(letters));
        self
    }

    pub fn order_for(&self, word_length: usize) -> &[char] {
        self.orders
            .get(&word_length)
            .map_or(self.fallback.as_slice(), Vec::as_slice)
    }

    pub fn has_order(&self, word_length: usize) -> bool {
        self.orders.contains_key(&word_length)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn normalize(letters: &str) -> Vec<char> {
    letters
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
