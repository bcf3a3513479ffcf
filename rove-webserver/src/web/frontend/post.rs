use std::{io, path::Path};

use maud::Markup;
use rocket::{
    self,
    form::{self, Contextual, Form},
    fs::TempFile,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    tokio::io::AsyncReadExt as _,
    uri, FromForm,
};

use super::{view, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::{
    entities::*,
    gateways::image::{ImageFormat, ImageUpload, UnsupportedImageFormat},
    pagination::{PageRequest, POSTS_PER_PAGE},
    repositories::PostRepo,
    usecases::{self, Error as BusinessError},
};

#[derive(FromForm)]
pub struct PostForm<'r> {
    #[field(validate = len(1..=20))]
    title: String,
    #[field(validate = len(1..=40))]
    location: String,
    #[field(validate = len(1..=256))]
    content: String,
    image: Option<TempFile<'r>>,
}

impl PostForm<'_> {
    const FIELDS: &'static [&'static str] = &["title", "location", "content", "image"];

    fn post_content(&self) -> usecases::PostContent {
        usecases::PostContent {
            location: self.location.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

enum Upload {
    Missing,
    Unsupported(UnsupportedImageFormat),
    Image(ImageUpload),
}

fn image_format(file: &TempFile<'_>) -> std::result::Result<ImageFormat, UnsupportedImageFormat> {
    if let Some(content_type) = file.content_type() {
        if content_type.is_png() {
            return Ok(ImageFormat::Png);
        }
        if content_type.is_jpeg() {
            return Ok(ImageFormat::Jpeg);
        }
    }
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .ok_or(UnsupportedImageFormat)?
        .parse()
}

/// Browsers submit an empty file if no picture has been selected.
async fn read_upload(file: Option<&TempFile<'_>>) -> io::Result<Upload> {
    let Some(file) = file.filter(|file| file.len() > 0) else {
        return Ok(Upload::Missing);
    };
    let format = match image_format(file) {
        Ok(format) => format,
        Err(err) => return Ok(Upload::Unsupported(err)),
    };
    let mut data = Vec::with_capacity(file.len() as usize);
    let mut reader = Box::pin(file.open().await?);
    reader.read_to_end(&mut data).await?;
    Ok(Upload::Image(ImageUpload { format, data }))
}

fn push_image_error(context: &mut form::Context<'_>, msg: String) {
    context.push_error(form::Error::validation(msg).with_name("image"));
}

#[get("/post/create")]
pub fn get_post_create(identity: Identity) -> Markup {
    view::post_form(
        "Create Post",
        identity.account(),
        "/post/create",
        &view::FormData::default(),
        true,
    )
}

#[post("/post/create", data = "<form>")]
pub async fn post_post_create(
    identity: Identity,
    db: Connections,
    images: &Images,
    form: Form<Contextual<'_, PostForm<'_>>>,
) -> Result {
    let mut form = form.into_inner();
    if let Some(post) = form.value.take() {
        match read_upload(post.image.as_ref()).await? {
            Upload::Image(upload) => {
                flows::create_post(
                    &db,
                    images.storage(),
                    identity.id(),
                    post.post_content(),
                    &upload,
                )?;
                return Ok(Flash::success(
                    Redirect::to(uri!(super::get_index)),
                    format!("New post {} created!", post.title),
                )
                .into());
            }
            Upload::Missing => {
                push_image_error(&mut form.context, "A picture is required.".to_string())
            }
            Upload::Unsupported(err) => push_image_error(&mut form.context, err.to_string()),
        }
    }
    let data = view::FormData::from_context(&form.context, PostForm::FIELDS);
    Ok(view::post_form(
        "Create Post",
        identity.account(),
        "/post/create",
        &data,
        true,
    )
    .into())
}

#[get("/posts?<page>")]
pub fn get_posts(
    identity: Option<Identity>,
    flash: Option<FlashMessage>,
    db: Connections,
    page: Option<u64>,
) -> Result<Markup> {
    let posts = {
        let db = db.shared()?;
        let posts = db.recent_posts(&PageRequest::new(page, POSTS_PER_PAGE))?;
        usecases::load_post_page_details(&db, posts)?
    };
    Ok(view::posts(
        "Posts",
        identity.as_ref().map(Identity::account),
        flash,
        "/posts",
        &posts,
    ))
}

#[get("/your_posts/<user_id>?<page>")]
pub fn get_your_posts(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
    user_id: i64,
    page: Option<u64>,
) -> Result {
    if !identity.is(user_id) {
        return Ok(super::redirect_home());
    }
    let posts = {
        let db = db.shared()?;
        let posts =
            db.posts_of_account(identity.id(), &PageRequest::new(page, POSTS_PER_PAGE))?;
        usecases::load_post_page_details(&db, posts)?
    };
    Ok(view::posts(
        "Your Posts",
        Some(identity.account()),
        flash,
        &format!("/your_posts/{user_id}"),
        &posts,
    )
    .into())
}

fn load_own_post(db: &Connections, identity: &Identity, post_id: PostId) -> Result<Post> {
    let db = db.shared()?;
    Ok(usecases::get_own_post(&db, identity.id(), post_id)?)
}

#[get("/your_posts/update/<post_id>")]
pub fn get_post_update(identity: Identity, db: Connections, post_id: i64) -> Result<Markup> {
    let post = load_own_post(&db, &identity, post_id.into())?;
    let data = view::FormData::default()
        .with_value("title", post.title)
        .with_value("location", post.location)
        .with_value("content", post.content);
    Ok(view::post_form(
        "Update Post",
        identity.account(),
        &format!("/your_posts/update/{post_id}"),
        &data,
        false,
    ))
}

#[post("/your_posts/update/<post_id>", data = "<form>")]
pub async fn post_post_update(
    identity: Identity,
    db: Connections,
    images: &Images,
    post_id: i64,
    form: Form<Contextual<'_, PostForm<'_>>>,
) -> Result {
    load_own_post(&db, &identity, post_id.into())?;
    let mut form = form.into_inner();
    if let Some(post) = form.value.take() {
        let upload = match read_upload(post.image.as_ref()).await? {
            Upload::Missing => Ok(None),
            Upload::Image(upload) => Ok(Some(upload)),
            Upload::Unsupported(err) => Err(err),
        };
        match upload {
            Ok(upload) => {
                flows::update_post(
                    &db,
                    images.storage(),
                    identity.id(),
                    post_id.into(),
                    post.post_content(),
                    upload.as_ref(),
                )?;
                return Ok(Flash::success(
                    Redirect::to(uri!(get_your_posts(identity.id().to_inner(), _))),
                    "Your post has been updated!",
                )
                .into());
            }
            Err(err) => push_image_error(&mut form.context, err.to_string()),
        }
    }
    let data = view::FormData::from_context(&form.context, PostForm::FIELDS);
    Ok(view::post_form(
        "Update Post",
        identity.account(),
        &format!("/your_posts/update/{post_id}"),
        &data,
        false,
    )
    .into())
}

#[post("/your_posts/<user_id>/<post_id>/delete")]
pub fn post_post_delete(
    identity: Identity,
    db: Connections,
    images: &Images,
    user_id: i64,
    post_id: i64,
) -> Result {
    if !identity.is(user_id) {
        return Ok(super::redirect_home());
    }
    flows::delete_post(&db, images.storage(), identity.id(), post_id.into())?;
    Ok(Flash::success(
        Redirect::to(uri!(get_your_posts(user_id, _))),
        "The Post has been deleted",
    )
    .into())
}

#[post("/post/<post_id>/like")]
pub fn post_like_post(
    identity: Identity,
    db: Connections,
    referer: Referer,
    post_id: i64,
) -> Result<Flash<Redirect>> {
    let back = referer.redirect_or("/");
    match flows::like_post(&db, identity.id(), post_id.into()) {
        Ok(()) => Ok(Flash::success(back, "You liked the post!")),
        Err(AppError::Business(BusinessError::PostAlreadyLiked)) => {
            Ok(Flash::error(back, "You already liked this post"))
        }
        Err(err) => Err(err.into()),
    }
}
