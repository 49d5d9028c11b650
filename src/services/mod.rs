//! Page operations that go beyond plain list edits: the add-doctor form,
//! roster figures and appointment booking.

pub mod appointments;
pub mod doctors;
