pub mod auth;
pub mod loaders;
pub mod queued_file;
pub mod result;
pub mod run_state;
pub mod session;

pub use auth::{AuthContext, UserInfo};
pub use loaders::load_candidate_files;
pub use queued_file::QueuedFile;
pub use result::{
    display_artifact_name, ExtractedRecord, ExtractionError, ProcessingResult, ProcessingSummary,
};
pub use run_state::RunState;
pub use session::Session;
