mod request_guard;

pub use request_guard::{LatestRequestGuard, RequestTicket};
