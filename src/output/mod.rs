//! Terminal output formatting

pub mod display;

pub use display::{
    format_buffer, format_keyboard_line, format_row, print_session, print_simulation_result,
    signal_messages,
};
