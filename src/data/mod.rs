//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and convert entity models into domain
//! models at the boundary. They are cheap to construct and borrow the connection, so
//! callers create one per operation.

pub mod player;
pub mod shutdown;
pub mod sticky_message;

#[cfg(test)]
mod test;
