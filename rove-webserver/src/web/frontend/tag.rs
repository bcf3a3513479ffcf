use maud::Markup;
use rocket::{
    self,
    form::{Contextual, Form},
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::{
    entities::NewTag,
    pagination::{PageRequest, POSTS_PER_PAGE, TAGS_PER_PAGE},
    repositories::{PostRepo, TagRepo},
    usecases::{self, Error as BusinessError},
};

#[derive(Debug, FromForm)]
pub struct TagForm {
    #[field(validate = len(1..=20))]
    name: String,
    #[field(validate = len(..=50))]
    description: String,
}

const FIELDS: &[&str] = &["name", "description"];

impl From<TagForm> for NewTag {
    fn from(from: TagForm) -> Self {
        let TagForm { name, description } = from;
        let description = Some(description).filter(|d| !d.trim().is_empty());
        Self { name, description }
    }
}

#[get("/tags?<page>")]
pub fn get_tags(
    identity: Option<Identity>,
    flash: Option<FlashMessage>,
    db: Connections,
    page: Option<u64>,
) -> Result<Markup> {
    let tags = db
        .shared()?
        .all_tags(&PageRequest::new(page, TAGS_PER_PAGE))?;
    Ok(view::tags(
        identity.as_ref().map(Identity::account),
        flash,
        &tags,
    ))
}

#[get("/tags/create")]
pub fn get_tag_create(identity: Identity, flash: Option<FlashMessage>) -> Markup {
    view::tag_form(identity.account(), flash, &view::FormData::default())
}

#[post("/tags/create", data = "<form>")]
pub fn post_tag_create(
    identity: Identity,
    db: Connections,
    form: Form<Contextual<'_, TagForm>>,
) -> Result {
    let form = form.into_inner();
    let Some(tag) = form.value else {
        let data = view::FormData::from_context(&form.context, FIELDS);
        return Ok(view::tag_form(identity.account(), None, &data).into());
    };
    let name = tag.name.clone();
    match flows::create_tag(&db, tag.into()) {
        Ok(_) => Ok(Flash::success(Redirect::to(uri!(get_tags(_))), "New Tag has been created!").into()),
        Err(AppError::Business(BusinessError::TagNameTaken)) => Ok(Flash::error(
            Redirect::to(uri!(get_tag_create)),
            format!("There is already a Tag named {name}. Please use a different name."),
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}

#[get("/tags/sort_by/<tag_id>?<page>")]
pub fn get_tagged_posts(
    identity: Option<Identity>,
    flash: Option<FlashMessage>,
    db: Connections,
    tag_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (tag, posts) = {
        let db = db.shared()?;
        let tag = db.get_tag(tag_id.into())?;
        let posts = db.posts_with_tag(tag.id, &PageRequest::new(page, POSTS_PER_PAGE))?;
        (tag, usecases::load_post_page_details(&db, posts)?)
    };
    Ok(view::posts(
        &format!("Posts tagged {}", tag.name),
        identity.as_ref().map(Identity::account),
        flash,
        &format!("/tags/sort_by/{tag_id}"),
        &posts,
    ))
}

#[get("/post/<post_id>/select_tag?<page>")]
pub fn get_select_tag(
    identity: Identity,
    db: Connections,
    post_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (post, tags) = {
        let db = db.shared()?;
        let post = usecases::get_own_post(&db, identity.id(), post_id.into())?;
        (post, db.all_tags(&PageRequest::new(page, TAGS_PER_PAGE))?)
    };
    Ok(view::select_tag(identity.account(), post.id, &tags))
}

#[post("/post/<post_id>/<tag_id>", rank = 2)]
pub fn post_attach_tag(
    identity: Identity,
    db: Connections,
    post_id: i64,
    tag_id: i64,
) -> Result<Flash<Redirect>> {
    let back = Redirect::to(uri!(super::post::get_your_posts(identity.id().to_inner(), _)));
    match flows::attach_tag_to_post(&db, identity.id(), post_id.into(), tag_id.into()) {
        Ok(()) => Ok(Flash::success(back, "The Tag has been added to your Post!")),
        Err(AppError::Business(BusinessError::TagAlreadyAttached)) => Ok(Flash::error(
            back,
            "The Post already has that tag added to it",
        )),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn create_tag<'c>(client: &'c Client, name: &str) -> LocalResponse<'c> {
        client
            .post("/tags/create")
            .header(ContentType::Form)
            .body(format!("name={name}&description="))
            .dispatch()
    }

    #[test]
    fn create_tag_only_once() {
        let (client, db, _images) = setup();
        register_account(&db, "alice");
        login(&client, "alice");

        let res = create_tag(&client, "Beach");
        assert_eq!(res.headers().get_one("Location"), Some("/tags"));
        let body = client.get("/tags").dispatch().into_string().unwrap();
        assert!(body.contains("New Tag has been created!"));

        let res = create_tag(&client, "Beach");
        assert_eq!(res.headers().get_one("Location"), Some("/tags/create"));
        let body = client.get("/tags/create").dispatch().into_string().unwrap();
        assert!(body.contains("There is already a Tag named Beach. Please use a different name."));

        let tags = all_tags(&db);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Beach");
        assert_eq!(tags[0].description, None);
    }

    #[test]
    fn pages_beyond_the_end_are_empty() {
        let (client, db, _images) = setup();
        register_account(&db, "alice");
        login(&client, "alice");
        create_tag(&client, "Beach");

        let res = client.get(format!("/tags?page={}", u64::MAX)).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(!body.contains("Beach"));
    }

    #[test]
    fn attach_tag_to_own_post() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        create_tag(&client, "Beach");
        let post = last_post_of(&db, alice).unwrap();
        let tag = all_tags(&db).remove(0);

        let body = client
            .get(format!("/post/{}/select_tag", post.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains(&format!("/post/{}/{}", post.id, tag.id)));

        client.post(format!("/post/{}/{}", post.id, tag.id)).dispatch();
        let body = client
            .get(format!("/your_posts/{alice}"))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("The Tag has been added to your Post!"));

        client.post(format!("/post/{}/{}", post.id, tag.id)).dispatch();
        let body = client
            .get(format!("/tags/sort_by/{}", tag.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("The Post already has that tag added to it"));
        assert!(body.contains("Lisbon"));
    }

    #[test]
    fn only_the_owner_can_tag_a_post() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        register_account(&db, "bob");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        create_tag(&client, "Beach");
        let post = last_post_of(&db, alice).unwrap();
        let tag = all_tags(&db).remove(0);
        client.post("/logout").dispatch();
        login(&client, "bob");

        let res = client.get(format!("/post/{}/select_tag", post.id)).dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/"));
        let res = client.post(format!("/post/{}/{}", post.id, tag.id)).dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/"));

        let body = client
            .get(format!("/tags/sort_by/{}", tag.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("There are no posts yet."));
    }
}
