use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+\d").unwrap());
static SCENE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SCENE [IV]").unwrap());
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^$").unwrap());

/// Line-start matcher that ends the current fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Whitespace followed by a digit (sonnet numbering, e.g. "  12")
    Numeral,
    /// "SCENE " followed by a roman numeral made of I/V
    Scene,
    /// Exactly empty line (stanza separator)
    BlankLine,
}

impl Boundary {
    /// All boundary styles, in CLI listing order
    pub const ALL: [Boundary; 3] = [Boundary::Numeral, Boundary::Scene, Boundary::BlankLine];

    /// Compiled start-anchored pattern for this style
    pub fn regex(&self) -> &'static Regex {
        match self {
            Boundary::Numeral => &*NUMERAL,
            Boundary::Scene => &*SCENE,
            Boundary::BlankLine => &*BLANK_LINE,
        }
    }

    /// True if `line` opens a new fragment
    pub fn matches(&self, line: &str) -> bool {
        self.regex().is_match(line)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Numeral => "numeral",
            Boundary::Scene => "scene",
            Boundary::BlankLine => "blank",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeral" => Ok(Boundary::Numeral),
            "scene" => Ok(Boundary::Scene),
            "blank" => Ok(Boundary::BlankLine),
            other => Err(format!(
                "unknown boundary '{}' (expected numeral, scene or blank)",
                other
            )),
        }
    }
}
