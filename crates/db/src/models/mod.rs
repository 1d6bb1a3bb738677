pub mod project;
pub mod punchlist_item;
pub mod schedule_project;
