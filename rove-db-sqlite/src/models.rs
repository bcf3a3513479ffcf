#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = account)]
pub struct NewAccount<'a> {
    pub user_name: &'a str,
    pub location: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct Account {
    pub id: i64,
    pub user_name: String,
    pub location: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = post)]
pub struct NewPost<'a> {
    pub account_id: i64,
    pub location: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub image: &'a str,
}

#[derive(Queryable)]
pub struct Post {
    pub id: i64,
    pub account_id: i64,
    pub location: String,
    pub title: String,
    pub content: String,
    pub image: String,
}

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment<'a> {
    pub account_id: i64,
    pub post_id: i64,
    pub content: &'a str,
}

#[derive(Queryable)]
pub struct Comment {
    pub id: i64,
    pub account_id: i64,
    pub post_id: i64,
    pub content: String,
}

#[derive(Insertable)]
#[diesel(table_name = post_like)]
pub struct PostLike {
    pub account_id: i64,
    pub post_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = comment_like)]
pub struct CommentLike {
    pub account_id: i64,
    pub comment_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tag)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = post_tag)]
pub struct PostTag {
    pub post_id: i64,
    pub tag_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = lodging)]
pub struct NewLodging<'a> {
    pub name: &'a str,
    pub location: &'a str,
}

#[derive(Queryable)]
pub struct Lodging {
    pub id: i64,
    pub name: String,
    pub location: String,
}

#[derive(Insertable)]
#[diesel(table_name = lodging_visit)]
pub struct NewLodgingVisit<'a> {
    pub post_id: i64,
    pub lodging_id: i64,
    pub cost: i32,
    pub rating: i32,
    pub comment: &'a str,
}

#[derive(Queryable)]
pub struct LodgingVisit {
    pub id: i64,
    pub post_id: i64,
    pub lodging_id: i64,
    pub cost: i32,
    pub rating: i32,
    pub comment: String,
}

#[derive(Insertable)]
#[diesel(table_name = destination_folder)]
pub struct NewDestinationFolder<'a> {
    pub account_id: i64,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct DestinationFolder {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = saved_destination)]
pub struct SavedDestination {
    pub folder_id: i64,
    pub post_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = todo)]
pub struct NewToDo<'a> {
    pub account_id: i64,
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Queryable)]
pub struct ToDo {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub description: String,
}
