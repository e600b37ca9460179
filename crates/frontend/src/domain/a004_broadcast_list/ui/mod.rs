mod list;
mod modal;

pub use list::BroadcastListPage;
pub use modal::BroadcastListModal;
