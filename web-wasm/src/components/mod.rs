pub mod action_bar;
pub mod file_picker;
pub mod header;
pub mod result_box;
