use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, page::*};
use rove_core::{
    entities::{Account, ToDo},
    pagination::Page,
};

pub fn todos(account: &Account, flash: Option<FlashMessage>, todos: &Page<ToDo>) -> Markup {
    page(
        "To Do",
        Some(account),
        flash,
        html! {
            h2 { "Your to do list" }
            a class="btn" href="/to_do/create" { "add an item" }
            ul class="todos" {
                @for todo in &todos.items {
                    li {
                        span class="name" { (todo.name) }
                        @if !todo.description.is_empty() {
                            " " span class="description" { (todo.description) }
                        }
                        a href=(format!("/to_do/modify/{}", todo.id)) { "modify" }
                        (action_button(&format!("/to_do/{}/delete/{}", account.id, todo.id), "done", ""))
                    }
                }
            }
            (pagination("/to_do", todos))
        },
    )
}

pub fn todo_form(title: &str, account: &Account, action: &str, data: &FormData) -> Markup {
    page(
        title,
        Some(account),
        None,
        html! {
          form class="todo" action=(action) method="POST" {
              fieldset{
                legend { (title) }
                (text_field(data, "name", "To do:", 20))
                (text_area(data, "description", "Description:", 100))
                input type="submit" value="save";
              }
          }
        },
    )
}
