//! The components module contains all shared components for our app.

mod card_name_input;
mod icons;
pub mod image_resolver;
mod navigation;
pub mod query_params;
pub mod section;
pub mod views;

pub use card_name_input::*;
pub use icons::*;
pub use navigation::*;
// Views are accessed via views::ViewName
