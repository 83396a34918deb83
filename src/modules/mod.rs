pub mod features;
pub mod pages;
pub mod session;
pub mod sidebar;

pub use self::pages::model::PageResponse;
pub use self::session::model::SessionResponse;
