pub mod dto;

pub use dto::{AgingBucket, OutstandingRow, OutstandingSort, OutstandingSummary};
