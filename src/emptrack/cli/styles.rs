use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().cyan());
pub static BORDER: Lazy<Style> = Lazy::new(|| Style::new().color256(244));
pub static NULL: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
