// Interview CRUD surface. Generation creates rows; this module covers the
// owner-scoped listing, editing, and deletion around them.

pub mod handlers;
