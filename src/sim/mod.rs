//! DOE-2 SIM report parsing.
//!
//! A SIM file is the simulator's full paginated text report. The only pages
//! read here are the PS-E energy end-use summaries; everything else (LOADS,
//! SYSTEMS, PLANT reports) is skipped.

mod pse;

pub use pse::{parse_pse_report, parse_pse_text};
