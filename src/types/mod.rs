//! Core types for the analysis service.

mod config;
mod record;
mod response;

pub use config::ServiceConfig;
pub use record::ComplaintRecord;
pub use response::{
    AnalysisRequest, AnalysisResponse, CategorySummary, Pagination, RecordDetail,
};
