/// The greeting text. Lowercase, no trailing punctuation or newline.
pub const MESSAGE: &str = "hello, world";

/// Returns the greeting. Never fails and never allocates.
pub const fn get_message() -> &'static str {
    MESSAGE
}
