use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use serde::Serialize;

/// Form state plus the inline errors of its last submit attempt
pub struct FormViewModel<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
}

impl<F: Send + Sync + 'static> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormViewModel<F> {}

impl<F> FormViewModel<F>
where
    F: Validate + Serialize + Clone + Send + Sync + 'static,
{
    pub fn new(initial: F) -> Self {
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Read accessor for one text field
    pub fn field(&self, get: fn(&F) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f).clone()))
    }

    /// Write accessor for one text field
    pub fn setter(&self, set: fn(&mut F, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value| form.update(|f| set(f, value)))
    }

    /// Message shown under `field`, if its last check failed
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.message(field)))
    }

    /// Validate; on success log the payload as JSON and hand back a copy
    pub fn submit(&self, form_name: &str) -> Option<F> {
        let current = self.form.get_untracked();
        match current.validate() {
            Ok(()) => {
                self.errors.set(FieldErrors::new());
                match serde_json::to_string(&current) {
                    Ok(json) => log::info!("{} submitted: {}", form_name, json),
                    Err(e) => log::warn!("{} could not be serialized: {}", form_name, e),
                }
                Some(current)
            }
            Err(errors) => {
                log::debug!("{} rejected: {} invalid field(s)", form_name, errors.len());
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn reset(&self, initial: F) {
        self.form.set(initial);
        self.errors.set(FieldErrors::new());
    }
}
