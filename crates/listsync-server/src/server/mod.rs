pub mod app;
pub mod routes;
pub mod ws;

pub use app::*;
pub use routes::*;
pub use ws::*;
