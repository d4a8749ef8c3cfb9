pub mod api;
pub mod extract_client;

pub use api::ExtractApi;
pub use extract_client::{ExtractClient, USER_TOKEN_HEADER};
