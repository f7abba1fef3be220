pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Element the user clicks to open or close the account menu.
pub const USER_TRIGGER: &str = "user";
/// The account menu panel.
pub const USER_AREA: &str = "user-area";
