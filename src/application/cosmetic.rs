//! # Cosmetic Placeholders
//!
//! Random status line, random quote and a text-art banner of the username.

use std::fs;
use std::path::Path;

use figlet_rs::FIGfont;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::strings::{logs, messages};

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).map(|s| s.to_string()).unwrap_or_default()
}

pub fn random_status<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(messages::STATUS_MESSAGES, rng)
}

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(messages::QUOTES, rng)
}

/// The font file at `path`, or the built-in standard font when unset or unusable.
fn load_font(path: Option<&Path>) -> Option<FIGfont> {
    if let Some(path) = path {
        let font = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| FIGfont::from_content(&content));
        match font {
            Ok(font) => return Some(font),
            Err(e) => tracing::warn!("{}", logs::font_fallback(&path.display().to_string(), &e)),
        }
    }
    FIGfont::standard().ok()
}

fn figlet(text: &str, font: Option<&Path>) -> Option<String> {
    let font = load_font(font)?;
    let figure = font.convert(text)?;
    let rendered = figure.to_string();
    if rendered.trim().is_empty() { None } else { Some(rendered) }
}

/// The message in a speech bubble above a cow.
pub fn speech_bubble(message: &str) -> String {
    let width = message.chars().count() + 2;
    [
        format!(" {}", "_".repeat(width)),
        format!("< {} >", message),
        format!(" {}", "-".repeat(width)),
        r"        \   ^__^".to_string(),
        r"         \  (oo)\_______".to_string(),
        r"            (__)\       )\/\".to_string(),
        r"                ||----w |".to_string(),
        r"                ||     ||".to_string(),
    ]
    .join("\n")
}

/// FIGlet banner of the username, or a speech bubble greeting when FIGlet fails.
pub fn ascii_art(username: &str, font: Option<&Path>) -> String {
    match figlet(username, font) {
        Some(art) => art,
        None => {
            tracing::warn!("{}", logs::ASCII_ART_FALLBACK);
            speech_bubble(&messages::greeting(username))
        }
    }
}
