use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::domain::matcher::RandomPicker;
use crate::domain::types::Mood;
use crate::repository::WardrobeRepository;
use crate::services::main::show_index as show_index_service;
use crate::services::outfits::suggest_outfit as suggest_outfit_service;

#[get("/v1/wardrobe")]
pub async fn api_v1_wardrobe(repo: web::Data<WardrobeRepository>) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            error!("Failed to list wardrobe items: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ApiV1OutfitRequest {
    mood: String,
}

#[post("/v1/outfit")]
pub async fn api_v1_outfit(
    payload: web::Json<ApiV1OutfitRequest>,
    repo: web::Data<WardrobeRepository>,
) -> impl Responder {
    let mood = match Mood::try_from(payload.mood.as_str()) {
        Ok(mood) => mood,
        Err(e) => return HttpResponse::BadRequest().json(json!({ "error": e.to_string() })),
    };

    match suggest_outfit_service(mood, repo.get_ref(), &mut RandomPicker) {
        Ok(Ok(outfit)) => HttpResponse::Ok().json(outfit),
        Ok(Err(failure)) => {
            HttpResponse::UnprocessableEntity().json(json!({ "error": failure.to_string() }))
        }
        Err(e) => {
            error!("Failed to suggest outfit: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
