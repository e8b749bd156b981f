// User identity sync. Users are created on first successful authentication
// and never mutated or deleted by this service.

pub mod handlers;
