/// Compiles a CSS selector once and hands out a `&'static Selector`.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use $crate::__private::once_cell::sync::Lazy;
        use $crate::__private::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse($e).unwrap_or_else(|e| panic!("Invalid selector {:?}: {e}", $e))
        });
        &*SELECTOR
    }};
}

/// Compiles a regular expression once and hands out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        use $crate::__private::once_cell::sync::Lazy;
        use $crate::__private::regex::Regex;
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new($e).unwrap_or_else(|e| panic!("Invalid regex {:?}: {e}", $e)));
        &*PATTERN
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn selector_is_cached() {
        let first = {
            fn get() -> &'static scraper::Selector {
                selector!("tr.diary-entry-row")
            }
            (get() as *const _, get() as *const _)
        };
        assert_eq!(first.0, first.1);
    }

    #[test]
    fn regex_matches() {
        assert!(regex!(r"^[0-9]{4}$").is_match("1999"));
        assert!(!regex!(r"^[0-9]{4}$").is_match("199"));
    }
}
