use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{form::*, image_url, page::*};
use rove_core::{
    entities::{Account, Lodging, LodgingVisit, Post, PostId},
    pagination::Page,
};

fn rating(visit: &LodgingVisit) -> Markup {
    html! {
        span class="rating" title=(format!("{} of 5", visit.rating)) {
            @for _ in 0..visit.rating { "★" }
            @for _ in visit.rating..5 { "☆" }
        }
    }
}

fn visit_entry(visit: &LodgingVisit, post: &Post) -> Markup {
    html! {
        div class="visit" {
            p class="meta" {
                a href=(format!("/{}/visit", post.id)) { (post.title) }
                " " (rating(visit))
                " " span class="cost" { "$" (visit.cost) }
            }
            p class="comment" { (visit.comment) }
        }
    }
}

pub fn lodgings(
    account: Option<&Account>,
    flash: Option<FlashMessage>,
    lodgings: &Page<Lodging>,
) -> Markup {
    page(
        "Lodgings",
        account,
        flash,
        html! {
            h2 { "Lodgings" }
            @if account.is_some() {
                a class="btn" href="/lodgings/create" { "add a lodging" }
            }
            ul class="lodgings" {
                @for lodging in &lodgings.items {
                    li {
                        a href=(format!("/lodging/{}", lodging.id)) { (lodging.name) }
                        " " span class="location" { (lodging.location) }
                    }
                }
            }
            (pagination("/lodgings", lodgings))
        },
    )
}

pub fn lodging_form(account: &Account, data: &FormData) -> Markup {
    page(
        "Create a lodging",
        Some(account),
        None,
        html! {
          form class="lodging" action="/lodgings/create" method="POST" {
              fieldset{
                legend { "New lodging" }
                (text_field(data, "name", "Name:", 30))
                (text_field(data, "location", "Location:", 40))
                input type="submit" value="create";
              }
          }
        },
    )
}

pub fn lodging(
    account: Option<&Account>,
    lodging: &Lodging,
    visits: &Page<(LodgingVisit, Post)>,
) -> Markup {
    page(
        &lodging.name,
        account,
        None,
        html! {
            h2 { (lodging.name) }
            p class="location" { (lodging.location) }
            @for (visit, post) in &visits.items {
                (visit_entry(visit, post))
            }
            (pagination(&format!("/lodging/{}", lodging.id), visits))
            a href=(format!("/lodging/{}/visits", lodging.id)) { "all visits" }
        },
    )
}

pub fn lodging_visits(
    account: Option<&Account>,
    lodging: &Lodging,
    visits: &Page<(LodgingVisit, Post)>,
) -> Markup {
    let lodging_id = lodging.id;
    page(
        "Visits",
        account,
        None,
        html! {
            h2 { "Visits of " (lodging.name) }
            @if visits.items.is_empty() {
                p class="empty" { "Nobody has reported a visit yet." }
            }
            @for (visit, post) in &visits.items {
                (visit_entry(visit, post))
            }
            (pagination(&format!("/lodging/{lodging_id}/visits"), visits))
            a href=(format!("/lodging/{lodging_id}")) { "back to the lodging" }
        },
    )
}

pub fn select_lodging(account: &Account, post_id: PostId, lodgings: &Page<Lodging>) -> Markup {
    page(
        "Lodging",
        Some(account),
        None,
        html! {
            h2 { "Where did you stay?" }
            ul class="lodgings select" {
                @for lodging in &lodgings.items {
                    li {
                        a href=(format!("/post/{post_id}/add/lodging/{}", lodging.id)) { (lodging.name) }
                        " " span class="location" { (lodging.location) }
                    }
                }
            }
            (pagination(&format!("/post/{post_id}/select_lodging"), lodgings))
            a href="/lodgings/create" { "add a missing lodging" }
        },
    )
}

pub fn visit_form(account: &Account, post_id: PostId, lodging: &Lodging, data: &FormData) -> Markup {
    page(
        "Lodging visit",
        Some(account),
        None,
        html! {
          form class="visit" action=(format!("/post/{post_id}/add/lodging/{}", lodging.id)) method="POST" {
              fieldset{
                legend { "Your stay at " (lodging.name) }
                (number_field(data, "cost", "Cost:", 0, None))
                (number_field(data, "rating", "Rating (1-5):", 1, Some(5)))
                (text_field(data, "comment", "Comment:", 60))
                input type="submit" value="add";
              }
          }
        },
    )
}

pub fn visit(account: &Account, post: &Post, visit: &LodgingVisit, lodging: &Lodging) -> Markup {
    page(
        "Lodging visit",
        Some(account),
        None,
        html! {
            h2 { a href=(format!("/lodging/{}", lodging.id)) { (lodging.name) } }
            p class="location" { (lodging.location) }
            img class="thumbnail" src=(image_url(&post.image)) alt=(post.title);
            dl class="visit" {
                dt { "Post" }
                dd { (post.title) }
                dt { "Rating" }
                dd { (rating(visit)) }
                dt { "Cost" }
                dd { "$" (visit.cost) }
                dt { "Comment" }
                dd { (visit.comment) }
            }
        },
    )
}
