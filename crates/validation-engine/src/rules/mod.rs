//! Field-level validation rules shared by the form validators.

pub mod contact;
pub mod numeric;
pub mod text;
