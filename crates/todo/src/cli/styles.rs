//! Terminal styles shared by the renderers.
//!
//! `console` drops the escape codes by itself when stdout is not a terminal,
//! so the same rendering code serves pipes and tests.

use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static DONE: Lazy<Style> = Lazy::new(|| Style::new().dim().strikethrough());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
