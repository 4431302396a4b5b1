use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::item::ClothingItem;
use crate::domain::types::{Category, Mood, Style};

pub mod api;
pub mod items;
pub mod main;
pub mod outfits;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Debug => "secondary",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
    }
}

/// Mood button data handed to templates.
#[derive(Serialize)]
pub struct MoodOption {
    pub slug: &'static str,
    pub label: &'static str,
}

/// The upload panel's fixed color swatches.
#[derive(Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const COLOR_PALETTE: [PaletteColor; 11] = [
    PaletteColor { name: "Black", hex: "#000000" },
    PaletteColor { name: "White", hex: "#FFFFFF" },
    PaletteColor { name: "Gray", hex: "#808080" },
    PaletteColor { name: "Navy", hex: "#000080" },
    PaletteColor { name: "Brown", hex: "#964B00" },
    PaletteColor { name: "Beige", hex: "#F5F5DC" },
    PaletteColor { name: "Red", hex: "#FF0000" },
    PaletteColor { name: "Blue", hex: "#0000FF" },
    PaletteColor { name: "Green", hex: "#008000" },
    PaletteColor { name: "Yellow", hex: "#FFFF00" },
    PaletteColor { name: "Pink", hex: "#FFC0CB" },
];

pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Context for the single wardrobe page: grid items, mood buttons and the
/// upload form's select options.
pub(crate) fn wardrobe_context(
    flash_messages: &IncomingFlashMessages,
    items: &[ClothingItem],
) -> Context {
    let moods = Mood::ALL
        .iter()
        .map(|m| MoodOption {
            slug: m.as_str(),
            label: m.label(),
        })
        .collect::<Vec<_>>();

    let mut context = base_context(flash_messages, "index");
    context.insert("items", items);
    context.insert("selected_mood", "");
    context.insert("moods", &moods);
    context.insert("categories", &Category::ALL.map(Category::as_str));
    context.insert("styles", &Style::ALL.map(Style::as_str));
    context.insert("palette", &COLOR_PALETTE);
    context
}
