//! Line-oriented splitting of the input into its three sections.

use std::fmt;

use tracing::trace;

use crate::domain::InvalidInput;

/// Marker line opening the conveyor topology section.
pub const CONVEYOR_MARKER: &str = "# Section: Conveyor System";

/// Marker line opening the departures section.
pub const DEPARTURES_MARKER: &str = "# Section: Departures";

/// Marker line opening the bags section.
pub const BAGS_MARKER: &str = "# Section: Bags";

/// One of the three input sections, in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Conveyor,
    Departures,
    Bags,
}

impl SectionKind {
    /// All sections in required order.
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Conveyor,
        SectionKind::Departures,
        SectionKind::Bags,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            SectionKind::Conveyor => CONVEYOR_MARKER,
            SectionKind::Departures => DEPARTURES_MARKER,
            SectionKind::Bags => BAGS_MARKER,
        }
    }

    /// Recognize a marker line. Surrounding whitespace is ignored; anything
    /// else must match exactly.
    pub fn from_marker(line: &str) -> Option<Self> {
        let line = line.trim();
        Self::ALL.into_iter().find(|kind| kind.marker() == line)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.marker())
    }
}

/// A non-blank data line and its 1-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Whitespace-separated fields of the line.
    pub fn fields(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

/// The data lines of each section, borrowed from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub conveyor: Vec<SourceLine<'a>>,
    pub departures: Vec<SourceLine<'a>>,
    pub bags: Vec<SourceLine<'a>>,
}

impl<'a> Sections<'a> {
    fn lines_mut(&mut self, kind: SectionKind) -> &mut Vec<SourceLine<'a>> {
        match kind {
            SectionKind::Conveyor => &mut self.conveyor,
            SectionKind::Departures => &mut self.departures,
            SectionKind::Bags => &mut self.bags,
        }
    }
}

/// Split `input` into its conveyor, departures and bags sections.
///
/// Section structure is checked in full before any data line is looked at:
/// every marker must be present exactly once and in order. Data lines are
/// buffered into the section opened by the most recent marker. Blank lines
/// are dropped, as is anything before the first marker.
///
/// # Examples
///
/// ```
/// use baggage_router::parse::split_sections;
///
/// let input = concat!(
///     "# Section: Conveyor System\nA1 A2 4\n",
///     "# Section: Departures\nUA10 A2 LAX 08:00\n",
///     "# Section: Bags\n001 A1 UA10\n",
/// );
/// let sections = split_sections(input).unwrap();
/// assert_eq!(sections.conveyor[0].text, "A1 A2 4");
/// assert_eq!(sections.bags[0].number, 6);
///
/// assert!(split_sections("A1 A2 4\n").is_err());
/// ```
pub fn split_sections(input: &str) -> Result<Sections<'_>, InvalidInput> {
    check_markers(input)?;

    let mut sections = Sections::default();
    let mut current: Option<SectionKind> = None;

    for (idx, text) in input.lines().enumerate() {
        if let Some(kind) = SectionKind::from_marker(text) {
            current = Some(kind);
            continue;
        }
        if text.trim().is_empty() {
            continue;
        }
        match current {
            Some(kind) => sections.lines_mut(kind).push(SourceLine {
                number: idx + 1,
                text,
            }),
            None => trace!(line = idx + 1, "skipping text before first section"),
        }
    }

    Ok(sections)
}

/// Check that each marker appears exactly once, in order.
fn check_markers(input: &str) -> Result<(), InvalidInput> {
    let found: Vec<(usize, SectionKind)> = input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| SectionKind::from_marker(line).map(|kind| (idx + 1, kind)))
        .collect();

    let missing: Vec<String> = SectionKind::ALL
        .into_iter()
        .filter(|kind| !found.iter().any(|(_, k)| k == kind))
        .map(|kind| kind.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InvalidInput::new(format!(
            "missing section marker(s): {}",
            missing.join(", ")
        )));
    }

    let mut expected = SectionKind::ALL.into_iter();
    for (line, kind) in found {
        match expected.next() {
            Some(next) if next == kind => {}
            Some(next) if kind < next => {
                return Err(InvalidInput::at_line(
                    line,
                    format!("duplicate section marker {kind}"),
                ));
            }
            Some(next) => {
                return Err(InvalidInput::at_line(
                    line,
                    format!("section {kind} appears before {next}"),
                ));
            }
            None => {
                return Err(InvalidInput::at_line(
                    line,
                    format!("duplicate section marker {kind}"),
                ));
            }
        }
    }

    Ok(())
}
