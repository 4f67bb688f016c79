//! Caliper Core - Universal Unit Taxonomy
//!
//! The normalization layer of the Caliper engine: a closed taxonomy of
//! universal unit codes, many-to-one alias tables from external
//! vocabularies, curated selector categories, and the compatibility check.
//!
//! Vocabularies feeding the alias tables:
//! - AWS CloudWatch unit names ("Bytes/Second", "Milliseconds")
//! - UCUM codes ("By/s", "ms")
//! - OpenMetrics-style names ("bytes_per_second", "milliseconds")
//!
//! All tables are static data with init-once indexes; every operation is a
//! pure, synchronous function that never fails on bad input (unknown units
//! pass through, empty units resolve to sentinels).

mod alias;
mod category;
mod compat;
mod name;
mod unit;

pub use alias::{
    aliases, display_name_for, resolve_universal_unit, validate_alias_disjointness, AliasError,
    Resolved,
};
pub use category::{
    additional_categories, base_categories, categories_for, merge_categories, Source,
    UnitCategory, UnitOption,
};
pub use compat::{check_compatibility, Compatibility};
pub use name::display_name;
pub use unit::UniversalUnit;
