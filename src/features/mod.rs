//! Features Module - Form input to model input
//!
//! Layout, widget schema and vector assembly live here so the page, the
//! JSON API and the classifier agree on one feature order.

pub mod layout;
pub mod schema;
pub mod vector;

pub use layout::{LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT};
pub use schema::{FieldSpec, SelectOption, Widget, FIELD_SPECS};
pub use vector::{FeatureVector, PatientInput};
