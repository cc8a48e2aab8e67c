//! Parsing of routing input into a validated model.
//!
//! Input has three sections, each opened by a marker line:
//!
//! ```text
//! # Section: Conveyor System
//! <nodeA> <nodeB> <travelTime>
//! # Section: Departures
//! <flightId> <terminal> <destination> <HH:MM>
//! # Section: Bags
//! <bagId> <node> <flightId>
//! ```

mod builder;
mod sections;

pub use builder::{Model, ModelBuilder, build_model};
pub use sections::{
    BAGS_MARKER, CONVEYOR_MARKER, DEPARTURES_MARKER, SectionKind, Sections, SourceLine,
    split_sections,
};
