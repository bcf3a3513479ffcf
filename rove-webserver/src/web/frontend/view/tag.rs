use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, page::*};
use rove_core::{
    entities::{Account, PostId, Tag},
    pagination::Page,
};

fn tag_entry(tag: &Tag) -> Markup {
    html! {
        span class="name" { (tag.name) }
        @if let Some(description) = &tag.description {
            " " span class="description" { (description) }
        }
    }
}

pub fn tags(account: Option<&Account>, flash: Option<FlashMessage>, tags: &Page<Tag>) -> Markup {
    page(
        "Tags",
        account,
        flash,
        html! {
            h2 { "Tags" }
            @if account.is_some() {
                a class="btn" href="/tags/create" { "create a tag" }
            }
            ul class="tags" {
                @for tag in &tags.items {
                    li { a href=(format!("/tags/sort_by/{}", tag.id)) { (tag_entry(tag)) } }
                }
            }
            (pagination("/tags", tags))
        },
    )
}

pub fn tag_form(account: &Account, flash: Option<FlashMessage>, data: &FormData) -> Markup {
    page(
        "Create a Tag",
        Some(account),
        flash,
        html! {
          form class="tag" action="/tags/create" method="POST" {
              fieldset{
                legend { "New tag" }
                (text_field(data, "name", "Name:", 20))
                (text_field(data, "description", "Description (optional):", 50))
                input type="submit" value="create";
              }
          }
        },
    )
}

/// Each tag is a button that attaches it to the post.
pub fn select_tag(account: &Account, post_id: PostId, tags: &Page<Tag>) -> Markup {
    page(
        "Select a Tag",
        Some(account),
        None,
        html! {
            h2 { "Select a tag for your post" }
            ul class="tags select" {
                @for tag in &tags.items {
                    li {
                        form class="action" action=(format!("/post/{post_id}/{}", tag.id)) method="POST" {
                            input type="submit" value=(tag.name);
                        }
                        @if let Some(description) = &tag.description {
                            span class="description" { (description) }
                        }
                    }
                }
            }
            (pagination(&format!("/post/{post_id}/select_tag"), tags))
            a href="/tags/create" { "create a new tag" }
        },
    )
}
