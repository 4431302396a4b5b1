use std::fs;

use smartfit::WARDROBE_STORAGE_KEY;
use smartfit::domain::item::NewClothingItem;
use smartfit::domain::types::{Category, HexColor, ImageRef, Style};
use smartfit::repository::{WardrobeReader, WardrobeRepository, WardrobeWriter};

mod common;

fn new_item(category: Category, style: Style, color: &str) -> NewClothingItem {
    NewClothingItem {
        image: ImageRef::new("data:image/png;base64,AAAA").expect("valid image ref"),
        category,
        color: HexColor::new(color).expect("valid color"),
        style,
    }
}

#[test]
fn wardrobe_round_trips_across_a_restart() {
    let store = common::TestStore::new();

    let repo = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);
    repo.add_item(new_item(Category::Top, Style::Formal, "#000000"))
        .expect("should add top");
    repo.add_item(new_item(Category::Bottom, Style::Streetwear, "#0000FF"))
        .expect("should add bottom");
    repo.add_item(new_item(Category::Shoes, Style::Sport, "#FFFF00"))
        .expect("should add shoes");
    let before = repo.list_items().expect("should list items");
    drop(repo);

    let reopened = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);
    let after = reopened.list_items().expect("should list items");

    assert_eq!(after, before);
}

#[test]
fn removals_survive_a_restart() {
    let store = common::TestStore::new();

    let repo = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);
    let top = repo
        .add_item(new_item(Category::Top, Style::Casual, "#808080"))
        .expect("should add top");
    let bottom = repo
        .add_item(new_item(Category::Bottom, Style::Casual, "#964B00"))
        .expect("should add bottom");
    repo.remove_item(&top.id).expect("should remove top");
    drop(repo);

    let reopened = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);
    let items = reopened.list_items().expect("should list items");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, bottom.id);
}

#[test]
fn malformed_document_falls_back_to_an_empty_wardrobe() {
    let store = common::TestStore::new();
    fs::write(store.document_path(WARDROBE_STORAGE_KEY), "{ not json").expect("should seed file");

    let repo = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);

    assert!(repo.list_items().expect("should list items").is_empty());

    // The store stays usable and the next mutation rewrites a valid document.
    repo.add_item(new_item(Category::Top, Style::Casual, "#008000"))
        .expect("should add item");
    let document =
        fs::read_to_string(store.document_path(WARDROBE_STORAGE_KEY)).expect("document exists");
    let parsed: serde_json::Value = serde_json::from_str(&document).expect("valid json");
    assert_eq!(parsed.as_array().expect("array document").len(), 1);
}

#[test]
fn every_mutation_rewrites_the_full_document() {
    let store = common::TestStore::new();
    let repo = WardrobeRepository::open(store.storage(), WARDROBE_STORAGE_KEY);

    let item = repo
        .add_item(new_item(Category::Outerwear, Style::Formal, "#000080"))
        .expect("should add item");
    let document =
        fs::read_to_string(store.document_path(WARDROBE_STORAGE_KEY)).expect("document exists");
    let parsed: serde_json::Value = serde_json::from_str(&document).expect("valid json");
    assert_eq!(parsed.as_array().expect("array document").len(), 1);
    assert_eq!(parsed[0]["category"], "Outerwear");
    assert_eq!(parsed[0]["style"], "Formal");
    assert_eq!(parsed[0]["color"], "#000080");

    repo.remove_item(&item.id).expect("should remove item");
    let document =
        fs::read_to_string(store.document_path(WARDROBE_STORAGE_KEY)).expect("document exists");
    let parsed: serde_json::Value = serde_json::from_str(&document).expect("valid json");
    assert!(parsed.as_array().expect("array document").is_empty());
}
