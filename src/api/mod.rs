//! HTTP API module for the Vacation Ledger.
//!
//! This module exposes the accounting engine over stateless JSON endpoints:
//! yearly summaries, what-if validation of proposed events, and the public
//! holidays of the configured calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EventRequest, SummaryRequest, ValidationRequest};
pub use response::{
    ApiError, ApiErrorResponse, HolidayEntry, HolidaysResponse, SummaryResponse,
    ValidationResponse,
};
pub use state::AppState;
