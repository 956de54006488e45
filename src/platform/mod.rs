pub mod browser;
pub mod geolocation;
pub mod storage;

pub use storage::LocalStorageStore;
