//! Sea-ORM entities for the booking schema.
//!
//! Rooms and reservations are persisted alongside users; only users have a
//! public HTTP surface at the moment.

pub mod reservation;
pub mod room;
pub mod user;
