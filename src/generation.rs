use std::fmt;
use std::str::FromStr;

/// Main-series game generations, I through IX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Generation {
    Gen1 = 1,
    Gen2 = 2,
    Gen3 = 3,
    Gen4 = 4,
    Gen5 = 5,
    Gen6 = 6,
    Gen7 = 7,
    Gen8 = 8,
    Gen9 = 9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Gen1,
        Generation::Gen2,
        Generation::Gen3,
        Generation::Gen4,
        Generation::Gen5,
        Generation::Gen6,
        Generation::Gen7,
        Generation::Gen8,
        Generation::Gen9,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn roman(self) -> &'static str {
        match self {
            Generation::Gen1 => "I",
            Generation::Gen2 => "II",
            Generation::Gen3 => "III",
            Generation::Gen4 => "IV",
            Generation::Gen5 => "V",
            Generation::Gen6 => "VI",
            Generation::Gen7 => "VII",
            Generation::Gen8 => "VIII",
            Generation::Gen9 => "IX",
        }
    }

    /// Next generation, wrapping IX back to I.
    pub fn next(self) -> Self {
        Self::ALL[self.number() as usize % Self::ALL.len()]
    }

    /// Previous generation, wrapping I back to IX.
    pub fn prev(self) -> Self {
        Self::ALL[(self.number() as usize + Self::ALL.len() - 2) % Self::ALL.len()]
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gen {}", self.roman())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationParseError {
    #[error("invalid generation: '{0}'")]
    Invalid(String),
    #[error("generation out of range: {0} (expected 1-9)")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Generation {
    type Error = GenerationParseError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=9 => Ok(Self::ALL[n as usize - 1]),
            _ => Err(GenerationParseError::OutOfRange(n)),
        }
    }
}

impl FromStr for Generation {
    type Err = GenerationParseError;

    /// Accepts `"4"`, `"gen4"`, `"gen-4"`, `"Gen 4"`, `"generation-iv"` and bare roman numerals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let body = t
            .strip_prefix("generation")
            .or_else(|| t.strip_prefix("gen"))
            .unwrap_or(&t)
            .trim_start_matches(['-', ' ', '_']);
        if let Ok(n) = body.parse::<u8>() {
            return Generation::try_from(n);
        }
        Generation::ALL
            .iter()
            .copied()
            .find(|g| g.roman().eq_ignore_ascii_case(body))
            .ok_or_else(|| GenerationParseError::Invalid(s.to_string()))
    }
}
