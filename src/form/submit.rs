//! The submission coordinator: extract, validate, then act or report.

use super::registry::{FormData, FormRegistry};
use super::schema::Schema;

/// Reads the registry's current values, validates them against `schema`,
/// and either invokes `handler` with the clean record or distributes the
/// error map back onto the registry.
///
/// Prior errors are cleared before validation so stale messages never
/// survive a successful resubmit. Returns the handler's result on
/// success, `None` on validation failure; the handler is never invoked
/// for an invalid record.
pub fn submit<T>(
    registry: &mut FormRegistry,
    schema: &Schema,
    handler: impl FnOnce(&FormData) -> T,
) -> Option<T> {
    registry.clear_errors();
    let data = registry.data();
    match schema.validate(&data) {
        Ok(clean) => Some(handler(&clean)),
        Err(errors) => {
            registry.set_errors(errors);
            None
        }
    }
}
