mod swap_file;

pub use swap_file::{swap_file_location, swap_file_size};
