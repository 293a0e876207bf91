use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Programs,
    Events,
    Media,
    Volunteers,
    Contact,
    NotFound,
}

const TABLE: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/about", Route::About),
    ("/programs", Route::Programs),
    ("/events", Route::Events),
    ("/media", Route::Media),
    ("/volunteers", Route::Volunteers),
    ("/contact", Route::Contact),
];

impl Route {
    /// Every addressable page, in navigation order.
    pub fn all() -> impl Iterator<Item = Route> {
        TABLE.iter().map(|(_, r)| *r)
    }

    /// Match a URL path. Query strings, fragments and trailing slashes are
    /// ignored and matching is ASCII case-insensitive. Anything unknown is
    /// [`Route::NotFound`].
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };

        TABLE
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(path))
            .map(|(_, r)| *r)
            .unwrap_or(Route::NotFound)
    }

    pub fn path(self) -> Option<&'static str> {
        TABLE.iter().find(|(_, r)| *r == self).map(|(p, _)| *p)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Programs => "Programs & Membership",
            Route::Events => "Events",
            Route::Media => "Media Gallery",
            Route::Volunteers => "Volunteers",
            Route::Contact => "Contact Us",
            Route::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::content::NAV_ITEMS;

    #[test]
    fn resolves_every_nav_item() {
        for item in NAV_ITEMS {
            let route = Route::resolve(item.href);
            assert_ne!(route, Route::NotFound, "{}", item.href);
            assert_eq!(route.path(), Some(item.href));
        }
    }

    #[test]
    fn ignores_trailing_slash_query_and_case() {
        assert_eq!(Route::resolve("/events/"), Route::Events);
        assert_eq!(Route::resolve("/Media?category=Events"), Route::Media);
        assert_eq!(Route::resolve("/contact#form"), Route::Contact);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("///"), Route::Home);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::resolve("/donate"), Route::NotFound);
        assert_eq!(Route::resolve("/events/42"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn all_lists_seven_pages() {
        assert_eq!(Route::all().count(), 7);
    }
}
