//! Output formatting module

pub mod terminal;

pub use terminal::{
    print_error, print_header, print_success, print_summary, print_summary_table, print_warning,
};
