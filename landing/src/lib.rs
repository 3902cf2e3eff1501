// shared state for the landing page
//
// nothing here needs a browser: the webapp reads geometry and storage, hands
// the raw values to the types here, and renders whatever comes back

pub mod carousel;
pub mod form;
pub mod menu;
pub mod newsletter;
pub mod portfolio;
pub mod render;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod submission;
pub mod theme;
pub mod validate;
