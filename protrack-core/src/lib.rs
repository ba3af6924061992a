pub mod errors;
pub mod models;
pub mod paths;
pub mod repo;
pub mod store;

pub use errors::*;
pub use models::*;
pub use paths::*;
pub use repo::*;
pub use store::*;
