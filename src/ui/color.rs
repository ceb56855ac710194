//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const BLUE: &'static str = "\x1b[34m";

    /// Rendered as gray by most terminals
    pub const BRIGHT_BLACK: &'static str = "\x1b[90m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold and colored, used for headers and counters
pub fn bold(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}{}", Colors::BOLD, color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => env::var("TERM_PROGRAM").is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_colorize_with_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        assert_eq!(colorize("test", Colors::RED), "test");
        assert_eq!(bold("test", Colors::GREEN), "test");
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_force_color_zero_disables() {
        unsafe {
            std::env::set_var("FORCE_COLOR", "0");
        }
        assert!(!supports_formatting());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_force_color_enables() {
        let original_no_color = std::env::var("NO_COLOR").ok();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }

        assert_eq!(colorize("x", Colors::BLUE), "\x1b[34mx\x1b[0m");
        assert_eq!(bold("x", Colors::GREEN), "\x1b[1m\x1b[32mx\x1b[0m");

        unsafe {
            std::env::remove_var("FORCE_COLOR");
            if let Some(val) = original_no_color {
                std::env::set_var("NO_COLOR", val);
            }
        }
    }

    #[test]
    #[serial]
    fn test_plain_under_test_harness() {
        let original_force = std::env::var("FORCE_COLOR").ok();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }

        assert!(!supports_formatting());

        unsafe {
            if let Some(val) = original_force {
                std::env::set_var("FORCE_COLOR", val);
            }
        }
    }
}
