//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ConsoleNotifier, print_check_result, print_level_info, print_round_view,
    print_simulation_result,
};
