use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, image_url, page::*};
use rove_core::{entities::Account, pagination::Page, usecases::PostDetails};

pub fn post_card(details: &PostDetails, viewer: Option<&Account>) -> Markup {
    let post = &details.post;
    html! {
        article class="post" {
            h2 { (post.title) }
            p class="meta" {
                "by " span class="author" { (details.author) }
                " in " span class="location" { (post.location) }
            }
            img src=(image_url(&post.image)) alt=(post.title);
            p class="content" { (post.content) }
            @if !details.tags.is_empty() {
                ul class="tags" {
                    @for tag in &details.tags {
                        li { a href=(format!("/tags/sort_by/{}", tag.id)) { (tag.name) } }
                    }
                }
            }
            @if let Some((visit, lodging)) = &details.visit {
                p class="visit" {
                    "Stayed at "
                    a href=(format!("/lodging/{}", lodging.id)) { (lodging.name) }
                    " (" (visit.rating) "/5) "
                    a href=(format!("/{}/visit", post.id)) { "details" }
                }
            }
            div class="actions" {
                span class="likes" { (details.likes) " likes" }
                @if let Some(viewer) = viewer {
                    (action_button(&format!("/post/{}/like", post.id), "like", ""))
                    a href=(format!("/post/{}/comments", post.id)) { "comments" }
                    a href=(format!("/comment/{}/create", post.id)) { "comment" }
                    a href=(format!("/save_destination/select_folder/{}", post.id)) { "save destination" }
                    @if viewer.id == post.account_id {
                        a href=(format!("/your_posts/update/{}", post.id)) { "edit" }
                        a href=(format!("/post/{}/select_tag", post.id)) { "add tag" }
                        @if details.visit.is_none() {
                            a href=(format!("/post/{}/select_lodging", post.id)) { "add lodging visit" }
                        }
                        (action_button(&format!("/your_posts/{}/{}/delete", viewer.id, post.id), "delete", "danger"))
                    }
                }
            }
        }
    }
}

/// A paginated listing of posts found at `base`.
pub fn posts(
    title: &str,
    account: Option<&Account>,
    flash: Option<FlashMessage>,
    base: &str,
    posts: &Page<PostDetails>,
) -> Markup {
    page(
        title,
        account,
        flash,
        html! {
            h2 { (title) }
            @if posts.items.is_empty() {
                p class="empty" { "There are no posts yet." }
            }
            @for details in &posts.items {
                (post_card(details, account))
            }
            (pagination(base, posts))
        },
    )
}

/// The image is mandatory for new posts and optional when updating.
pub fn post_form(
    title: &str,
    account: &Account,
    action: &str,
    data: &FormData,
    image_required: bool,
) -> Markup {
    page(
        title,
        Some(account),
        None,
        html! {
          form class="post" action=(action) method="POST" enctype="multipart/form-data" {
              fieldset{
                legend { (title) }
                (text_field(data, "title", "Title:", 20))
                (text_field(data, "location", "Location:", 40))
                (text_area(data, "content", "Content:", 256))
                @if image_required {
                    (image_field(data, "image", "Picture (jpg or png):"))
                } @else {
                    (image_field(data, "image", "New picture (optional):"))
                }
                input type="submit" value="save";
              }
          }
        },
    )
}
