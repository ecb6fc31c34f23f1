//! Operations built on the addressing models.
//!
//! - [`divider`] - VLSM subnet division
//! - [`details`] - network details report
//! - [`request`] - typed requests/responses and the dispatcher
//! - [`batch`] - running a file of requests

pub mod batch;
mod details;
mod divider;
mod request;

// Re-export public functions
pub use batch::{parse_requests, read_requests, run_batch, BatchOutcome};
pub use details::{network_details, IpInfo, NetworkDetails, NetworkInfo};
pub use divider::{divide, divide_cidr};
pub use request::{execute, Request, Response, SubnetListing};
