//! Driving-route selection for the embedded map.
//!
//! The page offers two predefined routes to the venue. Exactly one of them is
//! active at a time and the embedded map always shows the active one.

use std::fmt;

/// Embedded map for the Karur route.
pub const ROUTE_A_MAP_URL: &str =
    "https://maps.google.com/maps?saddr=Karur&daddr=Paramathi+Velur&output=embed";

/// Embedded map for the Namakkal route.
pub const ROUTE_B_MAP_URL: &str =
    "https://maps.google.com/maps?saddr=Namakkal&daddr=Paramathi+Velur&output=embed";

/// Turn-by-turn directions for the Karur route, opened in a new tab.
pub const ROUTE_A_NAVIGATION_URL: &str = "https://maps.app.goo.gl/pMawDgs5gv4ueRZBA";

/// Turn-by-turn directions for the Namakkal route, opened in a new tab.
pub const ROUTE_B_NAVIGATION_URL: &str = "https://maps.app.goo.gl/74q59SriBdWVL1WR6";

/// One of the two predefined routes to the venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RouteSelection {
    /// Karur to Paramathi Velur.
    #[default]
    RouteA,
    /// Namakkal to Paramathi Velur.
    RouteB,
}

impl RouteSelection {
    /// All routes, in the order their controls are displayed.
    pub const ALL: [Self; 2] = [Self::RouteA, Self::RouteB];

    pub fn map_url(self) -> &'static str {
        match self {
            Self::RouteA => ROUTE_A_MAP_URL,
            Self::RouteB => ROUTE_B_MAP_URL,
        }
    }

    pub fn navigation_url(self) -> &'static str {
        match self {
            Self::RouteA => ROUTE_A_NAVIGATION_URL,
            Self::RouteB => ROUTE_B_NAVIGATION_URL,
        }
    }

    /// Label of the map toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::RouteA => "Route 1: Karur",
            Self::RouteB => "Route 2: Namakkal",
        }
    }

    /// Small caption above the navigation link title.
    pub fn caption(self) -> &'static str {
        match self {
            Self::RouteA => "Route 1",
            Self::RouteB => "Route 2",
        }
    }

    pub fn link_title(self) -> &'static str {
        match self {
            Self::RouteA => "From Karur",
            Self::RouteB => "Namakkal → Velur",
        }
    }
}

impl fmt::Display for RouteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteA => write!(f, "route1"),
            Self::RouteB => write!(f, "route2"),
        }
    }
}

/// Holds the active route of the map widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteSelector {
    current: RouteSelection,
}

impl RouteSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> RouteSelection {
        self.current
    }

    /// Make `route` the active one.
    ///
    /// Returns `false` when `route` was already active, in which case nothing
    /// changes.
    pub fn select_route(&mut self, route: RouteSelection) -> bool {
        if self.current == route {
            return false;
        }
        self.current = route;
        true
    }

    pub fn map_url(&self) -> &'static str {
        self.current.map_url()
    }

    pub fn is_active(&self, route: RouteSelection) -> bool {
        self.current == route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selector_starts_on_route_a() {
        let selector = RouteSelector::new();
        assert_eq!(selector.current_route(), RouteSelection::RouteA);
        assert_eq!(selector.map_url(), ROUTE_A_MAP_URL);
    }

    #[test]
    fn test_select_same_route_is_noop() {
        let mut selector = RouteSelector::new();
        let before = selector;

        assert!(!selector.select_route(RouteSelection::RouteA));
        assert_eq!(selector, before);
        assert_eq!(selector.map_url(), ROUTE_A_MAP_URL);
    }

    #[test]
    fn test_select_route_sets_current_and_url() {
        for route in RouteSelection::ALL {
            let mut selector = RouteSelector::new();
            selector.select_route(route);
            assert_eq!(selector.current_route(), route);
            assert_eq!(selector.map_url(), route.map_url());
        }
    }

    #[test]
    fn test_toggle_back_restores_url() {
        let mut selector = RouteSelector::new();
        let original = selector.map_url();

        assert!(selector.select_route(RouteSelection::RouteB));
        assert!(selector.select_route(RouteSelection::RouteA));

        assert_eq!(selector.map_url(), original);
        assert_eq!(selector, RouteSelector::new());
    }

    #[test]
    fn test_exactly_one_route_active() {
        let mut selector = RouteSelector::new();
        for route in [
            RouteSelection::RouteB,
            RouteSelection::RouteB,
            RouteSelection::RouteA,
        ] {
            selector.select_route(route);
            let active = RouteSelection::ALL
                .iter()
                .filter(|r| selector.is_active(**r))
                .count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_karur_then_namakkal_scenario() {
        let mut selector = RouteSelector::new();
        assert_eq!(selector.current_route(), RouteSelection::RouteA);
        assert!(selector.map_url().contains("saddr=Karur"));

        selector.select_route(RouteSelection::RouteB);
        assert_eq!(selector.current_route(), RouteSelection::RouteB);
        assert!(selector.map_url().contains("saddr=Namakkal"));

        let after_first = selector;
        assert!(!selector.select_route(RouteSelection::RouteB));
        assert_eq!(selector, after_first);
    }

    #[test]
    fn test_map_urls_are_embeds_to_the_venue() {
        for route in RouteSelection::ALL {
            let url = route.map_url();
            assert!(url.starts_with("https://maps.google.com/maps?"));
            assert!(url.contains("daddr=Paramathi+Velur"));
            assert!(url.ends_with("output=embed"));
        }
        assert_ne!(ROUTE_A_MAP_URL, ROUTE_B_MAP_URL);
    }

    #[test]
    fn test_navigation_urls_differ_per_route() {
        assert_eq!(
            RouteSelection::RouteA.navigation_url(),
            ROUTE_A_NAVIGATION_URL
        );
        assert_eq!(
            RouteSelection::RouteB.navigation_url(),
            ROUTE_B_NAVIGATION_URL
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RouteSelection::RouteA.to_string(), "route1");
        assert_eq!(RouteSelection::RouteB.to_string(), "route2");
    }
}
