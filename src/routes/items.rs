use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::items::UploadItemForm;
use crate::repository::WardrobeRepository;
use crate::routes::redirect;
use crate::services::ServiceError;
use crate::services::items::{add_item as add_item_service, remove_item as remove_item_service};

#[post("/items/upload")]
pub async fn upload_item(
    repo: web::Data<WardrobeRepository>,
    MultipartForm(form): MultipartForm<UploadItemForm>,
) -> impl Responder {
    let new_item = match form.into_new_item() {
        Ok(new_item) => new_item,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match add_item_service(new_item, repo.get_ref()) {
        Ok(_) => {
            FlashMessage::success("Added to your digital wardrobe.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to add wardrobe item: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/items/{item_id}/remove")]
pub async fn remove_item(
    item_id: web::Path<String>,
    repo: web::Data<WardrobeRepository>,
) -> impl Responder {
    match remove_item_service(&item_id, repo.get_ref()) {
        Ok(_) => {
            // Removing an id that is already gone is still a clean outcome.
            FlashMessage::success("Item removed.").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Unknown item.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to remove wardrobe item: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
