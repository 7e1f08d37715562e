pub mod analysis;
pub mod color_entry;
