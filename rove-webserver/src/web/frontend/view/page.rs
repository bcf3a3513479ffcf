use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

use rove_core::{entities::Account, pagination::Page};

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    account: Option<&Account>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title { (title) " | Rove" }
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body{
            (header(account))
            (flash_msg(flash))
            main { (content) }
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(account: Option<&Account>) -> Markup {
    html! {
    header {
        a class="brand" href="/" { "Rove" }
        nav {
            a href="/posts" { "posts" }
            a href="/tags" { "tags" }
            a href="/lodgings" { "lodgings" }
            @if let Some(account) = account {
                a href="/post/create" { "new post" }
                a href="/destination_folders" { "destinations" }
                a href="/to_do" { "to do" }
                a href="/account" { (account.user_name) }
                form class="logout" action="/logout" method="POST" {
                    input type="submit" value="logout";
                }
            }
            @ else {
                a href="/login" { "login" }
                a href="/register" { "register" }
            }
        }
    }
    }
}

/// Navigation between the pages of a listing at `base`.
pub fn pagination<T>(base: &str, page: &Page<T>) -> Markup {
    html! {
        @if page.prev_page().is_some() || page.next_page().is_some() {
            nav class="pagination" {
                @if let Some(prev) = page.prev_page() {
                    a href=(format!("{base}?page={prev}")) { "previous" }
                }
                span class="current" { "page " (page.page) " of " (page.pages().max(1)) }
                @if let Some(next) = page.next_page() {
                    a href=(format!("{base}?page={next}")) { "next" }
                }
            }
        }
    }
}

/// A button that submits an empty POST request.
pub fn action_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        form class="action" action=(action) method="POST" {
            input class=(class) type="submit" value=(label);
        }
    }
}
