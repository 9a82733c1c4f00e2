//! Domain models for the project-management task board.
//!
//! The landing, sign-in and sign-up pages carry no data of their own; their
//! copy is static and lives with the views. The only stored entity is the
//! [`Task`], shown as a card on the board and managed through the task API.

mod task;

pub use task::*;
