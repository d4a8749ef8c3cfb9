pub mod pdf_loader;

pub use pdf_loader::load_candidate_files;
