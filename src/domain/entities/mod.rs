//! Domain entities - Structured backlog work items

mod backlog_item;

pub use backlog_item::BacklogItem;
