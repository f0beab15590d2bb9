pub mod add;
pub mod checkin;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod seed;

use crate::cli::parser::FilterArgs;
use crate::core::report::ReportFilter;
use crate::errors::AppResult;

/// Turn the CLI filter flags into a report filter.
pub(crate) fn filter_from_args(args: &FilterArgs) -> AppResult<ReportFilter> {
    ReportFilter::from_raw(
        args.employee.as_deref(),
        args.from.as_deref(),
        args.to.as_deref(),
    )
}
