//! # Tidbok Core Library
//!
//! Core business logic for Tidbok, a task/time-tracking dashboard with
//! Swedish BAS accounting reports. The presentation layer (charts,
//! tables, forms) is a thin consumer of this library: it feeds user
//! events into the store and timer, and re-renders from the pure metric
//! and report functions on every change.
//!
//! ## Architecture
//!
//! - **Store**: ordered in-memory task and time-entry collections with
//!   explicit CRUD operations and cascade delete
//! - **Timer**: single-slot session driven by a caller-owned one-second
//!   tick, with an injected clock for deterministic tests
//! - **Metrics**: pure aggregation over the task collection (status
//!   distribution, hours by account, completion, estimate accuracy)
//! - **Report**: asynchronous provider abstraction, fetch serialization,
//!   per-account/per-category summaries and CSV export
//!
//! ## Key Components
//!
//! - [`TaskStore`]: task and time-entry collections
//! - [`TimerSession`]: at-most-one-active timing session
//! - [`ReportService`]: report view state with cancel-and-replace fetches
//! - [`Config`]: application configuration management

pub mod bas;
pub mod error;
pub mod export;
pub mod metrics;
pub mod report;
pub mod storage;
pub mod store;
pub mod task;
pub mod timer;

pub use bas::{standard_accounts, BasAccount};
pub use error::{ConfigError, CoreError, ExportError, ReportError, ValidationError};
pub use report::{DateRange, ReportDataset, ReportService, ReportType, SampleReportProvider};
pub use storage::Config;
pub use store::TaskStore;
pub use task::{Task, TaskDraft, TaskStatus, TimeEntry};
pub use timer::{format_elapsed, Clock, SystemClock, TimerSession};
