use maud::Markup;
use rocket::{
    self,
    form::{Contextual, Form},
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Reply, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::{
    pagination::{PageRequest, COMMENTS_OF_ACCOUNT_PER_PAGE, COMMENTS_OF_POST_PER_PAGE},
    repositories::{CommentRepo, PostRepo},
    usecases::{self, Error as BusinessError},
};

#[derive(Debug, FromForm)]
pub struct CommentForm {
    #[field(validate = len(1..=100))]
    content: String,
}

const FIELDS: &[&str] = &["content"];

#[get("/comment/<post_id>/create")]
pub fn get_comment_create(identity: Identity, db: Connections, post_id: i64) -> Result<Markup> {
    // Only existing posts can be commented
    db.shared()?.get_post(post_id.into())?;
    Ok(view::comment_form(
        "Create Comment",
        identity.account(),
        &format!("/comment/{post_id}/create"),
        &view::FormData::default(),
    ))
}

#[post("/comment/<post_id>/create", data = "<form>")]
pub fn post_comment_create(
    identity: Identity,
    db: Connections,
    post_id: i64,
    form: Form<Contextual<'_, CommentForm>>,
) -> Result {
    let form = form.into_inner();
    if let Some(CommentForm { content }) = form.value {
        flows::create_comment(&db, identity.id(), post_id.into(), content)?;
        return Ok(Flash::success(
            Redirect::to(uri!(get_post_comments(post_id, _))),
            "Your comment was created!",
        )
        .into());
    }
    let data = view::FormData::from_context(&form.context, FIELDS);
    Ok(view::comment_form(
        "Create Comment",
        identity.account(),
        &format!("/comment/{post_id}/create"),
        &data,
    )
    .into())
}

#[get("/post/<post_id>/comments?<page>")]
pub fn get_post_comments(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
    post_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (post, comments) = {
        let db = db.shared()?;
        let post = db.get_post(post_id.into())?;
        let comments = db.comments_of_post(
            post.id,
            &PageRequest::new(page, COMMENTS_OF_POST_PER_PAGE),
        )?;
        (post, usecases::load_comment_page_details(&db, comments)?)
    };
    Ok(view::comments(
        &format!("Comments on {}", post.title),
        identity.account(),
        flash,
        &format!("/post/{post_id}/comments"),
        &comments,
    ))
}

#[get("/your_comments/update/<comment_id>")]
pub fn get_comment_update(
    identity: Identity,
    db: Connections,
    comment_id: i64,
) -> Result<Markup> {
    let comment = {
        let db = db.shared()?;
        usecases::get_own_comment(&db, identity.id(), comment_id.into())?
    };
    let data = view::FormData::default().with_value("content", comment.content);
    Ok(view::comment_form(
        "Update Comment",
        identity.account(),
        &format!("/your_comments/update/{comment_id}"),
        &data,
    ))
}

#[post("/your_comments/update/<comment_id>", data = "<form>")]
pub fn post_comment_update(
    identity: Identity,
    db: Connections,
    comment_id: i64,
    form: Form<Contextual<'_, CommentForm>>,
) -> Result {
    let form = form.into_inner();
    if let Some(CommentForm { content }) = form.value {
        flows::update_comment(&db, identity.id(), comment_id.into(), content)?;
        return Ok(Redirect::to(uri!(get_your_comments(_))).into());
    }
    {
        let db = db.shared()?;
        usecases::get_own_comment(&db, identity.id(), comment_id.into())?;
    }
    let data = view::FormData::from_context(&form.context, FIELDS);
    Ok(view::comment_form(
        "Update Comment",
        identity.account(),
        &format!("/your_comments/update/{comment_id}"),
        &data,
    )
    .into())
}

#[post("/your_comments/<user_id>/<comment_id>/delete")]
pub fn post_comment_delete(
    identity: Identity,
    db: Connections,
    user_id: i64,
    comment_id: i64,
) -> Result {
    if !identity.is(user_id) {
        return Ok(super::redirect_home());
    }
    flows::delete_comment(&db, identity.id(), comment_id.into())?;
    Ok(Flash::success(
        Redirect::to(uri!(get_your_comments(_))),
        "The Comment has been deleted",
    )
    .into())
}

#[get("/your_comments?<page>")]
pub fn get_your_comments(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
    page: Option<u64>,
) -> Result<Markup> {
    let comments = {
        let db = db.shared()?;
        let comments = db.comments_of_account(
            identity.id(),
            &PageRequest::new(page, COMMENTS_OF_ACCOUNT_PER_PAGE),
        )?;
        usecases::load_comment_page_details(&db, comments)?
    };
    Ok(view::comments(
        "Your Comments",
        identity.account(),
        flash,
        "/your_comments",
        &comments,
    ))
}

#[post("/comment/<comment_id>/like")]
pub fn post_like_comment(
    identity: Identity,
    db: Connections,
    referer: Referer,
    comment_id: i64,
) -> Result<Reply> {
    let back = referer.redirect_or("/");
    match flows::like_comment(&db, identity.id(), comment_id.into()) {
        Ok(()) => Ok(Flash::success(back, "You liked the comment!").into()),
        Err(AppError::Business(BusinessError::CommentAlreadyLiked)) => {
            Ok(Flash::error(back, "You already liked this comment").into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn comment<'c>(client: &'c Client, post_id: PostId, content: &str) -> LocalResponse<'c> {
        client
            .post(format!("/comment/{post_id}/create"))
            .header(ContentType::Form)
            .body(format!("content={content}"))
            .dispatch()
    }

    #[test]
    fn comment_on_a_post() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        let post = last_post_of(&db, alice).unwrap();

        let res = comment(&client, post.id, "Lovely");
        assert_eq!(res.status(), Status::SeeOther);
        let location = format!("/post/{}/comments", post.id);
        assert_eq!(res.headers().get_one("Location"), Some(location.as_str()));

        let body = client.get(location).dispatch().into_string().unwrap();
        assert!(body.contains("Your comment was created!"));
        assert!(body.contains("Lovely"));
    }

    #[test]
    fn comment_on_missing_post() {
        let (client, db, _images) = setup();
        register_account(&db, "alice");
        login(&client, "alice");
        assert_eq!(comment(&client, PostId::new(42), "Lovely").status(), Status::NotFound);
        assert_eq!(
            client.get("/comment/42/create").dispatch().status(),
            Status::NotFound
        );
    }

    #[test]
    fn reject_empty_comment() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        let post = last_post_of(&db, alice).unwrap();
        let res = comment(&client, post.id, "");
        assert_eq!(res.status(), Status::Ok);
        let body = client
            .get("/your_comments")
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("No comments yet."));
    }

    #[test]
    fn only_the_owner_can_update_or_delete_a_comment() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        let bob = register_account(&db, "bob");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        let post = last_post_of(&db, alice).unwrap();
        comment(&client, post.id, "Lovely");
        let comment_id = last_comment_of(&db, alice).unwrap().id;
        client.post("/logout").dispatch();
        login(&client, "bob");

        let res = client
            .post(format!("/your_comments/update/{comment_id}"))
            .header(ContentType::Form)
            .body("content=Ugly")
            .dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/"));
        for user_id in [bob, alice] {
            let res = client
                .post(format!("/your_comments/{user_id}/{comment_id}/delete"))
                .dispatch();
            assert_eq!(res.headers().get_one("Location"), Some("/"));
        }
        assert_eq!(last_comment_of(&db, alice).unwrap().content, "Lovely");
    }

    #[test]
    fn update_and_delete_own_comment() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        let post = last_post_of(&db, alice).unwrap();
        comment(&client, post.id, "Lovely");
        let comment_id = last_comment_of(&db, alice).unwrap().id;

        let body = client
            .get(format!("/your_comments/update/{comment_id}"))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("Lovely"));

        let res = client
            .post(format!("/your_comments/update/{comment_id}"))
            .header(ContentType::Form)
            .body("content=Gorgeous")
            .dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/your_comments"));
        assert_eq!(last_comment_of(&db, alice).unwrap().content, "Gorgeous");

        let res = client
            .post(format!("/your_comments/{alice}/{comment_id}/delete"))
            .dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/your_comments"));
        assert!(last_comment_of(&db, alice).is_none());
    }

    #[test]
    fn like_a_comment_only_once() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        create_post(&client, "Lisbon");
        let post = last_post_of(&db, alice).unwrap();
        comment(&client, post.id, "Lovely");
        let comment_id = last_comment_of(&db, alice).unwrap().id;

        client.post(format!("/comment/{comment_id}/like")).dispatch();
        let body = client.get("/your_comments").dispatch().into_string().unwrap();
        assert!(body.contains("You liked the comment!"));

        client.post(format!("/comment/{comment_id}/like")).dispatch();
        let body = client.get("/your_comments").dispatch().into_string().unwrap();
        assert!(body.contains("You already liked this comment"));
        assert!(body.contains("1 likes"));
    }
}
