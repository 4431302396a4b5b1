use actix_web::{HttpResponse, Responder, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::matcher::RandomPicker;
use crate::forms::outfits::{SuggestOutfitForm, SuggestOutfitFormPayload};
use crate::repository::WardrobeRepository;
use crate::routes::{redirect, render_template, wardrobe_context};
use crate::services::main::show_index as show_index_service;
use crate::services::outfits::suggest_outfit as suggest_outfit_service;

#[post("/outfit")]
pub async fn suggest_outfit(
    form: web::Form<SuggestOutfitForm>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<WardrobeRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let payload = match SuggestOutfitFormPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match suggest_outfit_service(payload.mood, repo.get_ref(), &mut RandomPicker) {
        Ok(Ok(outfit)) => {
            let items = match show_index_service(repo.get_ref()) {
                Ok(items) => items,
                Err(err) => {
                    log::error!("Failed to render suggestion page: {err}");
                    return HttpResponse::InternalServerError().finish();
                }
            };
            let mut context = wardrobe_context(&flash_messages, &items);
            context.insert("outfit", &outfit);
            context.insert("selected_mood", payload.mood.as_str());
            render_template(&tera, "main/index.html", &context)
        }
        Ok(Err(failure)) => {
            FlashMessage::error(format!("{failure}. Please upload more items!")).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to suggest outfit: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
