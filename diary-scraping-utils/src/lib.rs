pub mod fs_json_util;
pub mod macros;

#[doc(hidden)]
pub mod __private {
    pub use once_cell;
    pub use regex;
    pub use scraper;
}
