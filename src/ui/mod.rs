pub mod die_view;
pub mod panels;
