mod session_rng;

pub mod colour_sort;

pub use session_rng::SessionRng;
