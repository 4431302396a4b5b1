use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::WardrobeRepository;
use crate::routes::{render_template, wardrobe_context};
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<WardrobeRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(items) => {
            let context = wardrobe_context(&flash_messages, &items);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render wardrobe page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
