pub mod models;
pub mod rates;
pub mod traits;

pub use models::*;
pub use rates::*;
pub use traits::*;
