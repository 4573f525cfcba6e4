//! Form engine: field handles, the field registry, validation schemas,
//! and the submission coordinator.
//!
//! Input controls own their value cells; the registry holds weak
//! imperative handles keyed by field name, so it can read, write, and
//! clear any field without touching the widgets directly. Validation
//! runs over the extracted record as a whole and reports every invalid
//! field at once.

mod handle;
mod registry;
mod schema;
mod submit;

pub use handle::{CellHandle, FieldHandle};
pub use registry::{FieldErrors, FormData, FormRegistry};
pub use schema::{Rule, Schema};
pub use submit::submit;
