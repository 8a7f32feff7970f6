pub mod product;
pub mod sale;
pub mod stats;
pub mod user;

pub use product::*;
pub use sale::*;
pub use stats::*;
pub use user::*;
