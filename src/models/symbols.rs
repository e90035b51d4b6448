use std::collections::HashMap;

/// Mint → display symbol lookup with a deterministic fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, String>,
}

impl SymbolTable {
    /// Number of leading mint characters used when a mint has no entry
    pub const FALLBACK_PREFIX_LEN: usize = 4;

    /// Empty table; every lookup falls back to the mint prefix
    pub fn empty() -> Self {
        Self { symbols: HashMap::new() }
    }

    pub fn with_entry(mut self, mint: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.insert(mint, symbol);
        self
    }

    pub fn insert(&mut self, mint: impl Into<String>, symbol: impl Into<String>) {
        self.symbols.insert(mint.into(), symbol.into());
    }

    /// Add or override entries
    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (mint, symbol) in entries {
            self.insert(mint, symbol);
        }
    }

    /// Symbol for `mint`, or the uppercased first four characters of the mint
    pub fn symbol_for(&self, mint: &str) -> String {
        match self.symbols.get(mint) {
            Some(symbol) => symbol.clone(),
            None => mint
                .chars()
                .take(Self::FALLBACK_PREFIX_LEN)
                .collect::<String>()
                .to_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::empty()
            .with_entry("JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", "JUP")
            .with_entry("So11111111111111111111111111111111111111112", "SOL")
            .with_entry("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC")
            .with_entry("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", "USDT")
    }
}
