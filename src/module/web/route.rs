//! Web Client Route Table
//!
//! A closed set of navigable paths. Other clients depend on these strings
//! by name, so the literals must stay stable.

use std::fmt;

/// Navigable sections of the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    AdminUserManagement,
    AdminSettings,
    AdminStats,
    AdminJobs,
    Albums,
    Photos,
    Sharing,
}

/// Route methods
///
impl AppRoute {
    /// Every route, in display order.
    pub const ALL: [AppRoute; 7] = [
        Self::AdminUserManagement,
        Self::AdminSettings,
        Self::AdminStats,
        Self::AdminJobs,
        Self::Albums,
        Self::Photos,
        Self::Sharing,
    ];

    /// Get the path string for the route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::AdminUserManagement => "/admin/user-management",
            Self::AdminSettings => "/admin/settings",
            Self::AdminStats => "/admin/server-status",
            Self::AdminJobs => "/admin/jobs-status",
            Self::Albums => "/albums",
            Self::Photos => "/photos",
            Self::Sharing => "/sharing",
        }
    }

    /// Whether the route belongs to the administrative section.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminUserManagement | Self::AdminSettings | Self::AdminStats | Self::AdminJobs
        )
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_path_literals() {
        assert_eq!(AppRoute::AdminUserManagement.path(), "/admin/user-management");
        assert_eq!(AppRoute::AdminSettings.path(), "/admin/settings");
        assert_eq!(AppRoute::AdminStats.path(), "/admin/server-status");
        assert_eq!(AppRoute::AdminJobs.path(), "/admin/jobs-status");
        assert_eq!(AppRoute::Albums.path(), "/albums");
        assert_eq!(AppRoute::Photos.path(), "/photos");
        assert_eq!(AppRoute::Sharing.path(), "/sharing");
    }

    #[test]
    fn test_paths_are_distinct() {
        // The table is a bijection between routes and path strings.
        let paths: HashSet<&str> = AppRoute::ALL.iter().map(|r| r.path()).collect();

        assert_eq!(paths.len(), AppRoute::ALL.len());
    }

    #[test]
    fn test_path_access_is_idempotent() {
        for route in AppRoute::ALL {
            assert_eq!(route.path(), route.path());
        }
    }

    #[test]
    fn test_admin_grouping() {
        let admin: Vec<AppRoute> = AppRoute::ALL.iter().copied().filter(|r| r.is_admin()).collect();

        assert_eq!(
            admin,
            vec![
                AppRoute::AdminUserManagement,
                AppRoute::AdminSettings,
                AppRoute::AdminStats,
                AppRoute::AdminJobs
            ]
        );
        assert!(!AppRoute::Albums.is_admin());
        assert!(!AppRoute::Photos.is_admin());
        assert!(!AppRoute::Sharing.is_admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(AppRoute::Albums.to_string(), "/albums");
    }
}
