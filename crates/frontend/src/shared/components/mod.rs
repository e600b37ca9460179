pub mod modal;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod table_checkbox;

pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use table_checkbox::{HeaderCheckbox, TableCheckbox};
