// Lira Words - Core Library
// Syrian pound redenomination (100:1) and Arabic number spelling
// Exposes all modules for use in CLI, TUI, API server, and tests

pub mod words;
pub mod currency;
pub mod numerals;
pub mod config;
pub mod batch;

// Re-export commonly used types
pub use words::{
    GrammaticalNumber, NounForms,
    spell_number, spell_number_with_currency, spell_number_with_currency_label,
    spell_number_simple,
};
pub use currency::{
    CurrencyEra, Direction, Conversion,
    convert, denominations,
    CONVERSION_RATE, OLD_DENOMINATIONS, NEW_DENOMINATIONS,
};
pub use numerals::{
    arabic_to_western, western_to_arabic, has_arabic_numerals,
    sanitize_input, parse_amount, parse_amount_strict, format_amount,
};
pub use config::Config;
pub use batch::{BatchRow, ConvertedRow, convert_file, convert_rows, load_amounts, write_rows};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
