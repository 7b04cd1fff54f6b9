/// Anchored sections of the home page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Servicios,
    Planes,
    Testimonios,
    Faq,
    Contacto,
}

/// Where a section link should take the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Already on the home page: scroll the element with this id into view.
    ScrollTo(&'static str),
    /// Elsewhere: load the home page at this anchor.
    Href(String),
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Inicio,
        Section::Servicios,
        Section::Planes,
        Section::Testimonios,
        Section::Faq,
        Section::Contacto,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Servicios => "servicios",
            Section::Planes => "planes",
            Section::Testimonios => "testimonios",
            Section::Faq => "faq",
            Section::Contacto => "contacto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Servicios => "Servicios",
            Section::Planes => "Planes",
            Section::Testimonios => "Testimonios",
            Section::Faq => "FAQ",
            Section::Contacto => "Contacto",
        }
    }

    pub fn nav_target(&self, on_home: bool) -> NavTarget {
        if on_home {
            NavTarget::ScrollTo(self.id())
        } else {
            NavTarget::Href(format!("/#{}", self.id()))
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Parses a location hash such as `#faq`. An empty hash or unknown id is `None`.
    pub fn from_hash(hash: &str) -> Option<Section> {
        Section::from_id(hash.strip_prefix('#').unwrap_or(hash))
    }
}

/// Scrolls the element carrying `id` into view. Missing elements are ignored.
pub fn scroll_to_id(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view_with_bool(true);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
