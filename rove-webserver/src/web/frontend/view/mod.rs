use maud::{html, Markup};
use rocket::request::FlashMessage;

use rove_core::entities::*;

mod account;
mod comment;
mod folder;
mod form;
mod lodging;
mod page;
mod post;
mod tag;
mod todo;

pub use account::*;
pub use comment::*;
pub use folder::*;
pub use form::FormData;
pub use lodging::*;
use page::*;
pub use post::*;
pub use tag::*;
pub use todo::*;

pub fn index(account: Option<&Account>, flash: Option<FlashMessage>) -> Markup {
    page(
        "Home",
        account,
        flash,
        html! {
            div class="landing" {
                h1 { "Rove" }
                p { "Share your trips, rate the places you stayed at and collect the destinations you still want to visit." }
                @if account.is_some() {
                    a class="btn" href="/post/create" { "write a post" }
                } @else {
                    a class="btn" href="/register" { "join now" }
                    " or "
                    a href="/posts" { "browse the latest posts" }
                }
            }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "Not found",
        None,
        None,
        html! {
            h2 { "Not found" }
            p { "The requested page does not exist." }
            a href="/" { "back to the start page" }
        },
    )
}

fn image_url(name: &str) -> String {
    format!("/post_pics/{name}")
}
