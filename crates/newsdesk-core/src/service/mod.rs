//! Domain services - the write path with its invariants, and the
//! featured-window read path.

mod landing;
mod posts;

pub use landing::{featured_window, FeaturedWindow, FEATURED_WINDOW_HOURS};
pub use posts::PostService;
