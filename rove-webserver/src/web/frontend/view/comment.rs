use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, page::*};
use rove_core::{entities::Account, pagination::Page, usecases::CommentDetails};

pub fn comments(
    title: &str,
    account: &Account,
    flash: Option<FlashMessage>,
    base: &str,
    comments: &Page<CommentDetails>,
) -> Markup {
    page(
        title,
        Some(account),
        flash,
        html! {
            h2 { (title) }
            @if comments.items.is_empty() {
                p class="empty" { "No comments yet." }
            }
            @for details in &comments.items {
                @let comment = &details.comment;
                div class="comment" {
                    p class="meta" {
                        span class="author" { (details.author) }
                        " on "
                        a href=(format!("/post/{}/comments", comment.post_id)) { "post " (comment.post_id) }
                    }
                    p class="content" { (comment.content) }
                    div class="actions" {
                        span class="likes" { (details.likes) " likes" }
                        (action_button(&format!("/comment/{}/like", comment.id), "like", ""))
                        @if comment.account_id == account.id {
                            a href=(format!("/your_comments/update/{}", comment.id)) { "edit" }
                            (action_button(&format!("/your_comments/{}/{}/delete", account.id, comment.id), "delete", "danger"))
                        }
                    }
                }
            }
            (pagination(base, comments))
        },
    )
}

pub fn comment_form(title: &str, account: &Account, action: &str, data: &FormData) -> Markup {
    page(
        title,
        Some(account),
        None,
        html! {
          form class="comment" action=(action) method="POST" {
              fieldset{
                legend { (title) }
                (text_area(data, "content", "Comment:", 100))
                input type="submit" value="save";
              }
          }
        },
    )
}
