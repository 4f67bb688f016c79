//! Caliper Format - Value Scaling and Display Formatting
//!
//! The rendering layer of the Caliper engine. Takes a numeric value and a
//! unit (raw string or resolved [`caliper_core::UniversalUnit`]) and
//! produces the final display string:
//!
//! - unit families walk values up and down SI/IEC prefix ladders
//! - the display-label mapping ties every unit to a formatter token or a
//!   short suffix (checked for completeness over the whole taxonomy)
//! - a token-keyed rendering primitive owns number shaping and
//!   suffix/prefix placement
//! - a fixed set of custom conversions handles clocks, durations, hex,
//!   scientific notation, booleans and datetimes
//!
//! Formatting is total: unknown units render in the generic short style
//! with the raw unit as a literal suffix.

mod convert;
mod family;
mod format;
mod label;
mod pad;
mod render;

pub use convert::custom_format;
pub use family::{
    family_of, scale_within_family, validate_family_disjointness, FamilyError, ScaledValue,
    UnitFamily, FAMILIES,
};
pub use format::{format_unit, format_value};
pub use label::{additional_label, format_token, validate_label_completeness, LabelError};
pub use pad::{pad, PrecisionPolicy};
pub use render::{label_for_token, render, render_number, Rendered};
