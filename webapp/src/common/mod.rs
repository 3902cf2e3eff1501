use dioxus::prelude::*;

use landing::{menu::MenuState, scroll::ScrollSnapshot, theme::Theme};

pub mod dom;
pub mod storage;
pub mod style;

use storage::BrowserStore;

// page-wide state
//
// SCROLL is rewritten by the window scroll listener installed in App, MENU by
// the header and by clicks anywhere outside it.  THEME starts from whatever was
// saved last time
pub static SCROLL: GlobalSignal<ScrollSnapshot> = Signal::global(ScrollSnapshot::default);
pub static MENU: GlobalSignal<MenuState> = Signal::global(MenuState::default);
pub static THEME: GlobalSignal<Theme> = Signal::global(|| Theme::load(&BrowserStore));
