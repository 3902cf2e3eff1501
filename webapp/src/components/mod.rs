pub mod carousel;
pub mod contact_form;
pub mod loader;
pub mod navigation;
pub mod newsletter;
pub mod portfolio;
pub mod reveal;
pub mod theme_toggle;
