use std::rc::Rc;

use log::debug;
use yew::prelude::*;

pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteState {
    pub dark_mode: bool,
    pub scrolled: bool,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            scrolled: false,
        }
    }
}

impl SiteState {
    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "theme-dark"
        } else {
            "theme-light"
        }
    }
}

pub enum SiteAction {
    ToggleTheme,
    SetScrolled(bool),
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SiteAction::ToggleTheme => {
                debug!("Theme switched, dark mode: {}", !self.dark_mode);
                Rc::new(Self {
                    dark_mode: !self.dark_mode,
                    ..*self
                })
            }
            // Scroll fires constantly; keep the same Rc so consumers don't re-render.
            SiteAction::SetScrolled(scrolled) if scrolled == self.scrolled => self,
            SiteAction::SetScrolled(scrolled) => Rc::new(Self { scrolled, ..*self }),
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

pub type SiteContext = UseReducerHandle<SiteState>;

#[hook]
pub fn use_site() -> SiteContext {
    let detached = use_reducer(SiteState::default);
    use_context::<SiteContext>().unwrap_or(detached)
}
