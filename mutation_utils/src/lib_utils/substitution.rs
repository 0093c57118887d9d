/*
    Nucleotide substitution spectrum between two mutation lists
        + a point substitution is <base><position><base>, bases A/C/G/T,
          T read as U (RNA alphabet)
        + the derived population's unique tokens count forward (ref>alt)
        + the ancestral population's unique tokens count reversed (alt>ref)
        + tokens in both lists never reach the counter
        + anything else (indels, ambiguity codes, ref == alt) goes to OTHER
*/

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use regex::Regex;
use log::{debug, info, trace};
use crate::MutationError;
use super::compare::ComparisonColumns;
use super::struct_helper::BomWriter;

pub const OTHER_LABEL: &str = "OTHER/Non-simple";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    fn from_dna(letter: char) -> Option<Base> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'T' | 'U' => Some(Base::U),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", letter)
    }
}

// the 12 directional classes, in report order
pub const SUBSTITUTION_TYPES: [(Base, Base); 12] = [
    (Base::C, Base::U),
    (Base::G, Base::A),
    (Base::A, Base::G),
    (Base::U, Base::C),
    (Base::G, Base::U),
    (Base::C, Base::A),
    (Base::G, Base::C),
    (Base::C, Base::G),
    (Base::A, Base::C),
    (Base::U, Base::G),
    (Base::A, Base::U),
    (Base::U, Base::A),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSubstitution {
    pub reference: Base,
    pub alternate: Base,
}

impl PointSubstitution {
    pub fn reversed(self) -> Self {
        Self { reference: self.alternate, alternate: self.reference }
    }

    pub fn label(&self) -> String {
        format!("{}>{}", self.reference, self.alternate)
    }

    // slot in SUBSTITUTION_TYPES, None when ref == alt
    fn type_index(&self) -> Option<usize> {
        SUBSTITUTION_TYPES
            .iter()
            .position(|&(reference, alternate)| reference == self.reference && alternate == self.alternate)
    }
}

fn point_substitution_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([ACGT])(\d+)([ACGT])$").expect("substitution pattern is valid"))
}

// "C193T" -> C>U, "a23403g+" -> A>G, "C193" / "CT193A" / "N501Y" -> None
pub fn parse_point_substitution(token: &str) -> Option<PointSubstitution> {
    let normalised = token.trim().to_uppercase();
    let normalised = normalised.trim_end_matches('+');
    let caps = point_substitution_pattern().captures(normalised)?;
    let base = |idx: usize| caps.get(idx).and_then(|m| m.as_str().chars().next()).and_then(Base::from_dna);
    Some(PointSubstitution { reference: base(1)?, alternate: base(3)? })
}

/// Which column of a comparison holds the derived (later) population.
/// Unique tokens of the derived side are counted as forward mutations,
/// unique tokens of the other side as reversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Derived {
    A,
    #[default]
    B,
}

impl Derived {
    pub fn ancestral(self) -> &'static str {
        match self {
            Derived::A => "B",
            Derived::B => "A",
        }
    }

    pub fn derived(self) -> &'static str {
        match self {
            Derived::A => "A",
            Derived::B => "B",
        }
    }

    pub fn headers(self) -> [String; 4] {
        [
            "Substitution".to_string(),
            format!("Count_total({}_to_{})", self.ancestral(), self.derived()),
            format!("Count_forward(Only_{})", self.derived()),
            format!("Count_reverse(Only_{})", self.ancestral()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrumEntry {
    pub label: String,
    pub forward: usize,
    pub reverse: usize,
}

impl SpectrumEntry {
    pub fn total(&self) -> usize {
        self.forward + self.reverse
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionSpectrum {
    forward: [usize; 12],
    reverse: [usize; 12],
    other_forward: usize,
    other_reverse: usize,
}

impl SubstitutionSpectrum {
    pub fn count<F, R>(forward_tokens: F, reverse_tokens: R) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut spectrum = Self::default();
        for token in forward_tokens {
            spectrum.add(token.as_ref(), false);
        }
        for token in reverse_tokens {
            spectrum.add(token.as_ref(), true);
        }
        spectrum
    }

    pub fn from_comparison(columns: &ComparisonColumns, derived: Derived) -> Self {
        match derived {
            Derived::B => Self::count(&columns.only_b, &columns.only_a),
            Derived::A => Self::count(&columns.only_a, &columns.only_b),
        }
    }

    fn add(&mut self, token: &str, reverse: bool) {
        let slot = parse_point_substitution(token)
            .map(|sub| if reverse { sub.reversed() } else { sub })
            .and_then(|sub| sub.type_index());
        match (slot, reverse) {
            (Some(idx), false) => self.forward[idx] += 1,
            (Some(idx), true) => self.reverse[idx] += 1,
            (None, false) => self.other_forward += 1,
            (None, true) => self.other_reverse += 1,
        }
        if slot.is_none() {
            debug!("'{}' is not a simple point substitution", token);
        } else {
            trace!("'{}' counted, reverse = {}", token, reverse);
        }
    }

    // 12 fixed classes followed by OTHER
    pub fn entries(&self) -> Vec<SpectrumEntry> {
        let mut entries: Vec<SpectrumEntry> = SUBSTITUTION_TYPES
            .iter()
            .enumerate()
            .map(|(idx, &(reference, alternate))| SpectrumEntry {
                label: PointSubstitution { reference, alternate }.label(),
                forward: self.forward[idx],
                reverse: self.reverse[idx],
            })
            .collect();
        entries.push(SpectrumEntry {
            label: OTHER_LABEL.to_string(),
            forward: self.other_forward,
            reverse: self.other_reverse,
        });
        entries
    }

    pub fn total(&self) -> usize {
        self.entries().iter().map(SpectrumEntry::total).sum()
    }

    pub fn write_csv(&self, outfile: &Path, derived: Derived) -> Result<(), MutationError> {
        info!("Output file: {:?}", outfile);
        let mut writer = BomWriter::create(outfile)?;
        writer.write_row(derived.headers())?;
        for entry in self.entries() {
            writer.serialize_row((&entry.label, entry.total(), entry.forward, entry.reverse))?;
        }
        writer.finish()
    }

    // aligned text rendering for the terminal
    pub fn render(&self, derived: Derived) -> String {
        let headers = derived.headers();
        let rows: Vec<[String; 4]> = self
            .entries()
            .into_iter()
            .map(|e| [e.label.clone(), e.total().to_string(), e.forward.to_string(), e.reverse.to_string()])
            .collect();
        let widths: Vec<usize> = (0..4)
            .map(|col| rows.iter().map(|r| r[col].len()).chain([headers[col].len()]).max().unwrap_or(0))
            .collect();
        let line = |cells: &[String; 4]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<String>>()
                .join(" ")
        };
        let mut table = line(&headers);
        for row in &rows {
            table.push('\n');
            table.push_str(&line(row));
        }
        table
    }
}
