//! The fixed set of visual skins.
//!
//! Every skin is a pure function from the same [`crate::PageData`] contract
//! to an HTML document, so any skin can render any draft.

pub mod classic;
pub mod minimal;
pub mod modern;

use shared_types::FontChoice;

/// CSS font stack for a branding font choice.
pub fn font_stack(font: FontChoice) -> &'static str {
    match font {
        FontChoice::Sans => "'Segoe UI', system-ui, sans-serif",
        FontChoice::Serif => "Georgia, 'Times New Roman', serif",
        FontChoice::Display => "'Trebuchet MS', Verdana, sans-serif",
    }
}
