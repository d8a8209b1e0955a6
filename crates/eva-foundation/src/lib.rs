pub mod error;
pub mod locale;
pub mod session;

pub use error::*;
pub use locale::*;
pub use session::*;
