pub mod logging;
pub mod session;

pub use session::generate_session_id;
