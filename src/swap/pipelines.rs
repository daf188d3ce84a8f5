mod resize;
mod status;

pub use resize::{ensure_swap_size, resize_swap};
pub use status::swap_status;
