pub mod access_log;
pub mod ids;

pub use access_log::access_log;
pub use ids::Ids;
