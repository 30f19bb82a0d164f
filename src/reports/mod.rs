//! Reports module for SpendTracker
//!
//! Provides the derived views of the session store: the monthly history
//! table, the expense trend forecast and the cut-back ranking.

pub mod forecast;
pub mod history;
pub mod trend;

pub use forecast::{
    cut_back_areas, cut_back_areas_by, format_cut_back, CutBackArea, ForecastReport, RankingBasis,
    DEFAULT_CUT_BACK_COUNT, DEFAULT_REDUCTION_RANGE,
};
pub use history::{savings_rate, HistoryReport, MonthSummary};
pub use trend::LinearTrend;
