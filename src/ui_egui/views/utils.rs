//! Common utility functions for the planning views.
//!
//! This module contains pure helper functions used by the grid renderer.

use chrono::{Datelike, NaiveDate};
use egui::Color32;

use crate::models::assignment::Assignment;

/// Fallback block color when a chantier has none.
pub const DEFAULT_BLOCK_COLOR: Color32 = Color32::from_rgb(100, 116, 139);

const WEEKDAY_SHORT: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500", "FF5500" or "#F50")
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    let expanded;
    let hex = match hex.len() {
        6 => hex,
        // "#RGB" shorthand
        3 => {
            expanded = hex.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        }
        _ => return None,
    };
    if !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

pub fn assignment_color(assignment: &Assignment) -> Color32 {
    assignment
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(DEFAULT_BLOCK_COLOR)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Column header label, e.g. "Lun 10/03".
pub fn format_day_header(date: NaiveDate) -> String {
    let weekday = WEEKDAY_SHORT[date.weekday().num_days_from_monday() as usize];
    format!("{} {}", weekday, date.format("%d/%m"))
}

/// Hover text for a block: chantier, times and note.
pub fn format_assignment_tooltip(assignment: &Assignment) -> String {
    let mut lines = vec![format!("🏗 {}", assignment.chantier_name)];
    lines.push(format!("📅 {}", assignment.date.format("%d/%m/%Y")));
    if let Some(times) = assignment.time_label() {
        lines.push(format!("🕐 {}", times));
    }
    if let Some(note) = assignment.note.as_deref().filter(|n| !n.trim().is_empty()) {
        let preview: String = note.chars().take(100).collect();
        if note.chars().count() > 100 {
            lines.push(format!("📝 {}…", preview));
        } else {
            lines.push(format!("📝 {}", preview));
        }
    }
    lines.join("\n")
}
