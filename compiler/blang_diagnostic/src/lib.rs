//! Diagnostics for the BLang front-end.
//!
//! - Every problem has a [`ParseErrorKind`] from a closed catalogue. Each kind
//!   belongs to one [`ParseErrorSeries`], whose prefix forms the public error
//!   code (`TK0005`, `SN0007`, ...).
//! - [`Diagnostic::create`] turns a kind plus the current token into a
//!   concrete diagnostic.
//! - An [`ErrorLogger`] collects the diagnostics of one parse session.
//! - [`ErrorDocs`] renders the catalogue, and the emitters render individual
//!   diagnostics for humans.

mod diagnostic;
mod docs;
pub mod emitter;
mod kind;
mod logger;

pub use diagnostic::{Diagnostic, Severity};
pub use docs::ErrorDocs;
pub use kind::{ParseErrorKind, ParseErrorSeries, UnknownErrorCode};
pub use logger::ErrorLogger;
