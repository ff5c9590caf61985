//! Equipment Viz Common Library
//!
//! CLIとWeb(WASM)とデスクトップで共有される型とユーティリティ

pub mod chart;
pub mod endpoints;
pub mod state;
pub mod types;

pub use chart::ChartData;
pub use endpoints::{BackendConfig, DEFAULT_BASE_URL};
pub use state::{ClientState, UserNotice};
pub use types::{EquipmentRecord, HistoryEntry, UploadResult};
