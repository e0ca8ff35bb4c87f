//! Navigation Routes
//!
//! Fixed route table for the sidebar.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Dashboard", href: "/", icon: "▦" },
    NavItem { name: "Leads", href: "/leads", icon: "👥" },
    NavItem { name: "Calls", href: "/calls", icon: "📞" },
    NavItem { name: "Settings", href: "/settings", icon: "⚙" },
];

/// Exact match only: `/leads` is not active on `/leads/1`
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// The route entry highlighted for `current_path`, if any
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| is_active(current_path, item.href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/leads", "/leads"));
        assert!(!is_active("/leads/1", "/leads"));
        assert!(!is_active("/leads/", "/leads"));
        assert!(!is_active("/lead", "/leads"));
    }

    #[test]
    fn test_root_is_not_a_prefix() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/calls", "/"));
        assert!(!is_active("", "/"));
    }

    #[test]
    fn test_active_item() {
        assert_eq!(active_item("/").map(|i| i.name), Some("Dashboard"));
        assert_eq!(active_item("/settings").map(|i| i.name), Some("Settings"));
        assert_eq!(active_item("/settings/profile"), None);
        assert_eq!(active_item("/unknown"), None);
    }

    #[test]
    fn test_at_most_one_active() {
        for path in ["/", "/leads", "/calls", "/settings", "/leads/1", "/x"] {
            let count = NAV_ITEMS.iter().filter(|item| is_active(path, item.href)).count();
            assert!(count <= 1, "{} matched {} routes", path, count);
        }
    }
}
