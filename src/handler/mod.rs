pub use self::signals::fetch_signals;

pub mod cache_sweeper;
mod signals;
