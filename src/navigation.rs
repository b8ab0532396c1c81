use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Experience,
    Gallery,
    Services,
    Contact,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no section with id `{0}`")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Gallery,
        Self::Services,
        Self::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Gallery => "gallery",
            Self::Services => "services",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Gallery => "Gallery",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == value)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

/// Header state: which nav item is highlighted and whether the mobile menu is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl NavigationState {
    pub fn select(self, section: Section) -> Self {
        Self {
            active: section,
            menu_open: false,
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}

/// Something that can bring an element with the given id into view.
pub trait AnchorScroller {
    /// Returns `false` when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Scrolls to the anchor named `id`. Missing anchors are ignored.
pub fn scroll_to_section(scroller: &impl AnchorScroller, id: &str) -> bool {
    let found = scroller.scroll_into_view(id);
    if !found {
        tracing::debug!(id, "scroll target not found");
    }
    found
}
