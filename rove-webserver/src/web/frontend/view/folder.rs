use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, page::*};
use rove_core::entities::{Account, DestinationFolder, PostId};

pub fn folders(
    account: &Account,
    flash: Option<FlashMessage>,
    folders: &[DestinationFolder],
) -> Markup {
    page(
        "Destination folders",
        Some(account),
        flash,
        html! {
            h2 { "Your destination folders" }
            a class="btn" href="/destination_folders/create" { "create a folder" }
            ul class="folders" {
                @for folder in folders {
                    li {
                        a href=(format!("/destination_folders/{}", folder.id)) { (folder.name) }
                        a href=(format!("/destination_folders/update/{}", folder.id)) { "rename" }
                        (action_button(&format!("/destination_folders/{}/delete", folder.id), "delete", "danger"))
                    }
                }
            }
        },
    )
}

pub fn folder_form(title: &str, account: &Account, action: &str, data: &FormData) -> Markup {
    page(
        title,
        Some(account),
        None,
        html! {
          form class="folder" action=(action) method="POST" {
              fieldset{
                legend { (title) }
                (text_field(data, "name", "Folder name:", 16))
                input type="submit" value="save";
              }
          }
        },
    )
}

pub fn select_folder(account: &Account, post_id: PostId, folders: &[DestinationFolder]) -> Markup {
    page(
        "Saved Destination",
        Some(account),
        None,
        html! {
            h2 { "Save the destination into one of your folders" }
            @if folders.is_empty() {
                p class="empty" { "You don't have any destination folders yet." }
            }
            ul class="folders select" {
                @for folder in folders {
                    li {
                        form class="action" action=(format!("/select_folder/{post_id}/{}", folder.id)) method="POST" {
                            input type="submit" value=(folder.name);
                        }
                    }
                }
            }
            a href="/destination_folders/create" { "create a folder" }
        },
    )
}
