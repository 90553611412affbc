use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cars")]
    Cars,
    #[at("/contact")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes listed in the navbar, in display order.
    pub const NAV: [Self; 3] = [Self::Home, Self::Cars, Self::Contact];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cars => "Cars",
            Self::Contact => "Contact",
            Self::NotFound => "Not Found",
        }
    }
}
