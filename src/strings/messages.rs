//! # Messages
//!
//! Fixed pools of text the cosmetic placeholders draw from.

pub const NOT_AVAILABLE: &str = "N/A";

pub const STATUS_MESSAGES: &[&str] = &[
    "Currently building the future, one commit at a time",
    "Debugging the universe since 1999",
    "Teaching computers to think like humans",
    "Converting caffeine into code",
    "Crafting digital experiences that matter",
    "Breaking and rebuilding things to understand them better",
];

pub const QUOTES: &[&str] = &[
    "The best way to predict the future is to build it.",
    "Code is like humor. When you have to explain it, it's bad.",
    "First, solve the problem. Then, write the code.",
    "It's not a bug – it's an undocumented feature.",
    "The most disastrous thing that you can ever learn is your first programming language.",
    "Programming isn't about what you know; it's about what you can figure out.",
    "The only way to learn a new programming language is by writing programs in it.",
    "Testing leads to failure, and failure leads to understanding.",
];

pub fn greeting(username: &str) -> String {
    format!("Hello, I'm {username}!")
}
