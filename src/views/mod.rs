pub mod creative_view;
pub mod entry_view;
pub mod logical_view;
pub mod widgets;
