pub mod aggregate;

pub use aggregate::{BroadcastList, ListKind, ListMember, ListRef, SaveBroadcastListDto};
