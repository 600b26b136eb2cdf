//! Rendering layer: shared card field selection plus the HTML export
//! surface. The interactive terminal surface lives in `crate::ui` and uses
//! the same [`cards`] helpers.

pub mod cards;
pub mod html;
