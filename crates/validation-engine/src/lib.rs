//! Form validation for wizard and visitor inputs.
//!
//! Each `validate_*` function takes a raw, loosely-shaped input and returns
//! either a normalized domain value or a [`ValidationError`] that lists
//! **every** violated field, not just the first. Validators are pure: no
//! clock, no storage, no side effects.

pub mod error;
pub mod forms;
pub mod rules;

pub use error::{FieldError, ValidationError};
pub use forms::{
    validate_agent_profile, validate_contact_form, validate_property, AgentProfileInput,
    ContactForm, ContactFormInput, PropertyInput,
};
