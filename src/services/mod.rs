pub mod artifact_sink;
pub mod batch_planner;
pub mod intake;
pub mod progress;

pub use artifact_sink::{ArtifactSink, FsArtifactSink};
pub use batch_planner::{batch_count, plan_batches, DEFAULT_BATCH_SIZE};
pub use intake::admit_files;
pub use progress::ProgressTracker;
