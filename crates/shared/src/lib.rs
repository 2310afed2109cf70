// Public modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notion;
pub mod rotation;
pub mod selector;
pub mod slack;

// Re-export commonly used types
pub use catalog::CatalogClient;
pub use config::Config;
pub use error::PipelineError;
pub use models::{DayContext, Difficulty, Problem, SelectedProblem, SelectionCriteria};
pub use notion::NotionRecorder;
pub use rotation::Schedule;
pub use selector::pick_problems;
pub use slack::SlackNotifier;
