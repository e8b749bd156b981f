// Report read surface. The feedback generator inserts rows; this module
// covers owner-scoped listing, the results view with its computed summary,
// and explicit deletion.

pub mod handlers;
