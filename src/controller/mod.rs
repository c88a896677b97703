pub mod factors;
pub mod profile;
pub mod version;
