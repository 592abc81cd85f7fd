// Library interface for StrideCalc modules
// Integration tests and the CLI both go through this crate root

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use batch::{BatchConfig, BatchProcessor, BatchSummary};
pub use dispatch::{read_package, sample_packages};
pub use error::{Result, StrideCalcError};
pub use export::OutputFormat;
pub use import::SensorPackage;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{MessageLocale, WorkoutKind, WorkoutRecord};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingBase};
pub use walking::SportsWalking;
