#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub upper: bool,
    pub lower: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    pub fn all(&mut self) {
        self.upper = true;
        self.lower = true;
        self.numbers = true;
        self.symbols = true;
    }

    /// Whether any character class was named on the command line.
    pub fn has_classes(&self) -> bool {
        self.upper || self.lower || self.numbers || self.symbols
    }
}
