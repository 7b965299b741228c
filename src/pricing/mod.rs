pub mod dates;
pub mod error;
pub mod floors;
pub mod handlers;
pub mod models;
pub mod money;
pub mod service;
pub mod suggestions;

pub use dates::*;
pub use error::*;
pub use floors::*;
pub use models::*;
pub use money::*;
pub use service::*;
pub use suggestions::*;
