//! Admin dashboard tab selection.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Stats,
    Users,
    Stores,
    AddUser,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Stats, AdminTab::Users, AdminTab::Stores, AdminTab::AddUser];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stats => "Dashboard",
            Self::Users => "Users",
            Self::Stores => "Stores",
            Self::AddUser => "Add User",
        }
    }
}
