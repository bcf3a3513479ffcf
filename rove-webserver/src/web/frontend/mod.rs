use maud::Markup;
use rocket::{
    self, catch, catchers, get,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, Catcher, Request, Responder, Route,
};

use super::{error::Error, guards::*};

mod account;
mod comment;
mod folder;
mod login;
mod lodging;
mod post;
mod register;
mod tag;
mod todo;
mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T = Reply> = std::result::Result<T, Error>;

/// The possible outcomes of a frontend route.
#[derive(Responder)]
pub enum Reply {
    Page(Markup),
    Redirect(Redirect),
    Flash(Flash<Redirect>),
}

impl From<Markup> for Reply {
    fn from(from: Markup) -> Self {
        Self::Page(from)
    }
}

impl From<Redirect> for Reply {
    fn from(from: Redirect) -> Self {
        Self::Redirect(from)
    }
}

impl From<Flash<Redirect>> for Reply {
    fn from(from: Flash<Redirect>) -> Self {
        Self::Flash(from)
    }
}

fn redirect_home() -> Reply {
    Redirect::to(uri!(get_index)).into()
}

#[get("/")]
pub fn get_index(identity: Option<Identity>, flash: Option<FlashMessage>) -> Markup {
    view::index(identity.as_ref().map(Identity::account), flash)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[catch(401)]
fn unauthorized(req: &Request) -> Redirect {
    let next = req.uri().to_string();
    Redirect::to(uri!(login::get_login(Some(next.as_str()))))
}

#[catch(404)]
fn not_found() -> Markup {
    view::not_found()
}

pub fn catchers() -> Vec<Catcher> {
    catchers![unauthorized, not_found]
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
        account::get_account,
        account::get_account_modify,
        account::post_account_modify,
        account::post_account_delete,
        post::get_post_create,
        post::post_post_create,
        post::get_posts,
        post::get_your_posts,
        post::get_post_update,
        post::post_post_update,
        post::post_post_delete,
        post::post_like_post,
        comment::get_comment_create,
        comment::post_comment_create,
        comment::get_post_comments,
        comment::get_comment_update,
        comment::post_comment_update,
        comment::post_comment_delete,
        comment::get_your_comments,
        comment::post_like_comment,
        tag::get_tags,
        tag::get_tag_create,
        tag::post_tag_create,
        tag::get_tagged_posts,
        tag::get_select_tag,
        tag::post_attach_tag,
        lodging::get_lodgings,
        lodging::get_lodging_create,
        lodging::post_lodging_create,
        lodging::get_lodging,
        lodging::get_lodging_visits,
        lodging::get_select_lodging,
        lodging::get_visit_create,
        lodging::post_visit_create,
        lodging::get_post_visit,
        folder::get_folders,
        folder::get_folder_create,
        folder::post_folder_create,
        folder::get_folder_update,
        folder::post_folder_update,
        folder::post_folder_delete,
        folder::get_folder,
        folder::get_select_folder,
        folder::post_save_destination,
        folder::post_add_destination,
        todo::get_todos,
        todo::get_todo_create,
        todo::post_todo_create,
        todo::get_todo_modify,
        todo::post_todo_modify,
        todo::post_todo_complete,
    ]
}
