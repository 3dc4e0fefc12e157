//! Parser tests.
//!
//! - `parser`: shapes of the trees produced for each production
//! - `errors`: rejected programs and the lines they are reported on

mod errors;
mod parser;
