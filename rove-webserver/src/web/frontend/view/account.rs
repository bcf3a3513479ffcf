use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, page::*};
use rove_core::entities::Account;

pub fn login(flash: Option<FlashMessage>, data: &FormData, next: Option<&str>) -> Markup {
    page(
        "Login",
        None,
        flash,
        html! {
          form class="login" action="/login" method="POST" {
              fieldset{
                legend { "Log in" }
                @for err in data.errors("") {
                    div class="error" { (err) }
                }
                (text_field(data, "user_name", "Username:", 16))
                (password_field(data, "password", "Password:"))
                label {
                    input type="checkbox" name="remember";
                    " remember me"
                }
                br;
                @if let Some(next) = next {
                    input type="hidden" name="next" value=(next);
                }
                input type="submit" value="login";
                " Need an account? "
                a href="/register" { "register" }
              }
          }
        },
    )
}

pub fn register(data: &FormData) -> Markup {
    page(
        "Register",
        None,
        None,
        html! {
          form class="register" action="/register" method="POST" {
              fieldset{
                legend { "Join Rove" }
                (text_field(data, "user_name", "Username:", 16))
                (text_field(data, "location", "Location:", 40))
                (text_field(data, "first_name", "First name:", 20))
                (text_field(data, "last_name", "Last name:", 20))
                (password_field(data, "password", "Password:"))
                (password_field(data, "confirm_password", "Confirm password:"))
                input type="submit" value="register";
                " Already have an account? "
                a href="/login" { "login" }
              }
          }
        },
    )
}

pub fn account(account: &Account, flash: Option<FlashMessage>) -> Markup {
    page(
        "Account",
        Some(account),
        flash,
        html! {
            h2 { (account.user_name) }
            dl class="profile" {
                dt { "Name" }
                dd { (account.first_name) " " (account.last_name) }
                dt { "Location" }
                dd { (account.location) }
            }
            nav class="account" {
                a href=(format!("/your_posts/{}", account.id)) { "your posts" }
                a href="/your_comments" { "your comments" }
                a href="/account/modify" { "modify account" }
            }
            (action_button("/account/delete", "delete account", "danger"))
        },
    )
}

pub fn modify_account(account: &Account, data: &FormData) -> Markup {
    page(
        "Modify Account",
        Some(account),
        None,
        html! {
          form action="/account/modify" method="POST" {
              fieldset{
                legend { "Account info" }
                (text_field(data, "user_name", "Username:", 16))
                (text_field(data, "location", "Location:", 40))
                (text_field(data, "first_name", "First name:", 20))
                (text_field(data, "last_name", "Last name:", 20))
                input type="submit" value="update";
              }
          }
        },
    )
}
