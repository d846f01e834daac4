//! Small reusable render helpers shared by the screens.

pub mod pagination;
pub mod sub_tabs;
