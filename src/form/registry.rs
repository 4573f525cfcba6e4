//! The field registry — authoritative store of form values and errors.

use std::collections::BTreeMap;

use super::handle::FieldHandle;

/// A snapshot of field names to their current values.
pub type FormData = BTreeMap<String, String>;

/// Field name to validation message, one message per field.
pub type FieldErrors = BTreeMap<String, String>;

/// Maps field names to the imperative handles of their controls, plus the
/// current validation errors.
///
/// The registry is the authoritative form state; the visible controls are
/// a projection of it. Controls register on mount and unregister on
/// unmount; registering an existing name overwrites the prior handle, so
/// a remounted control never leaves a duplicate entry. Error keys are
/// always a subset of the registered names.
#[derive(Debug, Default)]
pub struct FormRegistry {
    fields: BTreeMap<String, Box<dyn FieldHandle>>,
    errors: FieldErrors,
}

impl FormRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field under `name`, replacing any prior handle.
    pub fn register(&mut self, name: impl Into<String>, handle: Box<dyn FieldHandle>) {
        self.fields.insert(name.into(), handle);
    }

    /// Removes a field and any error recorded against it.
    pub fn unregister(&mut self, name: &str) {
        self.fields.remove(name);
        self.errors.remove(name);
    }

    /// Returns the names of all registered fields.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the current value of a field, or `None` if it is not registered.
    pub fn field_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(|handle| handle.read())
    }

    /// Extracts the current values of every registered field.
    pub fn data(&self) -> FormData {
        self.fields
            .iter()
            .map(|(name, handle)| (name.clone(), handle.read()))
            .collect()
    }

    /// Writes a value into a single field. Unregistered names are ignored.
    pub fn set_field_value(&mut self, name: &str, value: &str) {
        if let Some(handle) = self.fields.get(name) {
            handle.write(value);
        }
    }

    /// Bulk-writes values into registered fields; entries for names that
    /// are not registered are dropped.
    pub fn set_data(&mut self, data: &FormData) {
        for (name, value) in data {
            self.set_field_value(name, value);
        }
    }

    /// Records a validation message against a registered field.
    pub fn set_field_error(&mut self, name: &str, message: impl Into<String>) {
        if self.fields.contains_key(name) {
            self.errors.insert(name.to_string(), message.into());
        }
    }

    /// Replaces all errors with the given map, dropping keys that are not
    /// registered field names.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors
            .into_iter()
            .filter(|(name, _)| self.fields.contains_key(name))
            .collect();
    }

    /// Returns the validation message for a field, if one is recorded.
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Returns the current error map.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Removes all recorded errors.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Returns `true` if any field has an error recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Clears a single field's value.
    pub fn clear_field(&mut self, name: &str) {
        if let Some(handle) = self.fields.get(name) {
            handle.clear();
        }
    }

    /// Clears every registered field's value and all errors.
    pub fn reset(&mut self) {
        for handle in self.fields.values() {
            handle.clear();
        }
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::form::CellHandle;

    fn cell(value: &str) -> Rc<RefCell<String>> {
        Rc::new(RefCell::new(value.to_string()))
    }

    fn register(registry: &mut FormRegistry, name: &str, cell: &Rc<RefCell<String>>) {
        registry.register(name, Box::new(CellHandle::new(cell)));
    }

    mod registration {
        use super::*;

        #[test]
        fn registered_field_is_readable() {
            let mut registry = FormRegistry::new();
            let email = cell("user@example.com");
            register(&mut registry, "email", &email);
            assert_eq!(
                registry.field_value("email"),
                Some("user@example.com".to_string())
            );
        }

        #[test]
        fn unregistered_field_reads_none() {
            let registry = FormRegistry::new();
            assert_eq!(registry.field_value("missing"), None);
        }

        #[test]
        fn reregistration_overwrites_prior_handle() {
            let mut registry = FormRegistry::new();
            let first = cell("old");
            let second = cell("new");
            register(&mut registry, "email", &first);
            register(&mut registry, "email", &second);
            assert_eq!(registry.field_value("email"), Some("new".to_string()));
            assert_eq!(registry.names().count(), 1);
        }

        #[test]
        fn unregister_removes_field_and_error() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            register(&mut registry, "email", &email);
            registry.set_field_error("email", "required");
            registry.unregister("email");
            assert_eq!(registry.field_value("email"), None);
            assert!(!registry.has_errors());
        }

        #[test]
        fn dropped_control_reads_empty() {
            let mut registry = FormRegistry::new();
            {
                let short_lived = cell("temp");
                register(&mut registry, "email", &short_lived);
            }
            assert_eq!(registry.field_value("email"), Some(String::new()));
        }
    }

    mod values {
        use super::*;

        #[test]
        fn data_extracts_all_fields() {
            let mut registry = FormRegistry::new();
            let email = cell("a@b.co");
            let password = cell("secret");
            register(&mut registry, "email", &email);
            register(&mut registry, "password", &password);

            let data = registry.data();
            assert_eq!(data.get("email"), Some(&"a@b.co".to_string()));
            assert_eq!(data.get("password"), Some(&"secret".to_string()));
            assert_eq!(data.len(), 2);
        }

        #[test]
        fn set_field_value_writes_through_to_cell() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            register(&mut registry, "email", &email);
            registry.set_field_value("email", "typed@example.com");
            assert_eq!(*email.borrow(), "typed@example.com");
        }

        #[test]
        fn set_field_value_unknown_name_is_noop() {
            let mut registry = FormRegistry::new();
            registry.set_field_value("ghost", "value");
            assert_eq!(registry.field_value("ghost"), None);
        }

        #[test]
        fn set_data_round_trips_registered_names() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            let name = cell("");
            register(&mut registry, "email", &email);
            register(&mut registry, "name", &name);

            let mut data = FormData::new();
            data.insert("email".into(), "a@b.co".into());
            data.insert("name".into(), "Ada".into());
            data.insert("unknown".into(), "dropped".into());
            registry.set_data(&data);

            let read_back = registry.data();
            assert_eq!(read_back.get("email"), Some(&"a@b.co".to_string()));
            assert_eq!(read_back.get("name"), Some(&"Ada".to_string()));
            assert!(!read_back.contains_key("unknown"));
        }

        #[test]
        fn clear_field_empties_single_value() {
            let mut registry = FormRegistry::new();
            let email = cell("a@b.co");
            let name = cell("Ada");
            register(&mut registry, "email", &email);
            register(&mut registry, "name", &name);
            registry.clear_field("email");
            assert_eq!(registry.field_value("email"), Some(String::new()));
            assert_eq!(registry.field_value("name"), Some("Ada".to_string()));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn set_field_error_records_message() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            register(&mut registry, "email", &email);
            registry.set_field_error("email", "Enter your e-mail");
            assert_eq!(registry.field_error("email"), Some("Enter your e-mail"));
            assert!(registry.has_errors());
        }

        #[test]
        fn set_field_error_on_unregistered_name_is_noop() {
            let mut registry = FormRegistry::new();
            registry.set_field_error("ghost", "nope");
            assert!(!registry.has_errors());
        }

        #[test]
        fn set_errors_replaces_prior_map() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            let name = cell("");
            register(&mut registry, "email", &email);
            register(&mut registry, "name", &name);
            registry.set_field_error("email", "old");

            let mut errors = FieldErrors::new();
            errors.insert("name".into(), "required".into());
            registry.set_errors(errors);

            assert_eq!(registry.field_error("email"), None);
            assert_eq!(registry.field_error("name"), Some("required"));
        }

        #[test]
        fn set_errors_drops_unregistered_keys() {
            let mut registry = FormRegistry::new();
            let email = cell("");
            register(&mut registry, "email", &email);

            let mut errors = FieldErrors::new();
            errors.insert("email".into(), "required".into());
            errors.insert("ghost".into(), "dropped".into());
            registry.set_errors(errors);

            assert_eq!(registry.errors().len(), 1);
            assert_eq!(registry.field_error("ghost"), None);
        }

        #[test]
        fn clear_errors_keeps_values() {
            let mut registry = FormRegistry::new();
            let email = cell("a@b.co");
            register(&mut registry, "email", &email);
            registry.set_field_error("email", "bad");
            registry.clear_errors();
            assert!(!registry.has_errors());
            assert_eq!(registry.field_value("email"), Some("a@b.co".to_string()));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_clears_values_and_errors() {
            let mut registry = FormRegistry::new();
            let email = cell("a@b.co");
            register(&mut registry, "email", &email);
            registry.set_field_error("email", "bad");
            registry.reset();
            assert_eq!(registry.field_value("email"), Some(String::new()));
            assert!(!registry.has_errors());
        }

        #[test]
        fn reset_is_idempotent() {
            let mut registry = FormRegistry::new();
            let email = cell("a@b.co");
            register(&mut registry, "email", &email);
            registry.reset();
            let after_once = registry.data();
            registry.reset();
            assert_eq!(registry.data(), after_once);
            assert!(!registry.has_errors());
        }
    }
}
