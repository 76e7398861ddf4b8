//! External scanner invocation and batch orchestration

pub mod batch;
pub mod invoker;
pub mod types;

pub use batch::scan_all;
pub use invoker::ScannerCommand;
pub use types::ScanOutcome;
