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
    entities::{FolderId, PostId},
    pagination::{PageRequest, POSTS_PER_PAGE},
    repositories::{FolderRepo, PostRepo},
    usecases::{self, Error as BusinessError},
};

#[derive(Debug, FromForm)]
pub struct FolderForm {
    #[field(validate = len(1..=16))]
    name: String,
}

const FIELDS: &[&str] = &["name"];

#[get("/destination_folders")]
pub fn get_folders(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
) -> Result<Markup> {
    let folders = db.shared()?.folders_of_account(identity.id())?;
    Ok(view::folders(identity.account(), flash, &folders))
}

#[get("/destination_folders/create")]
pub fn get_folder_create(identity: Identity) -> Markup {
    view::folder_form(
        "Create a destination folder",
        identity.account(),
        "/destination_folders/create",
        &view::FormData::default(),
    )
}

#[post("/destination_folders/create", data = "<form>")]
pub fn post_folder_create(
    identity: Identity,
    db: Connections,
    form: Form<Contextual<'_, FolderForm>>,
) -> Result {
    let form = form.into_inner();
    let Some(FolderForm { name }) = form.value else {
        let data = view::FormData::from_context(&form.context, FIELDS);
        return Ok(view::folder_form(
            "Create a destination folder",
            identity.account(),
            "/destination_folders/create",
            &data,
        )
        .into());
    };
    flows::create_folder(&db, identity.id(), name.clone())?;
    Ok(Flash::success(
        Redirect::to(uri!(get_folders)),
        format!("Destination folder {name} created!"),
    )
    .into())
}

#[get("/destination_folders/update/<folder_id>")]
pub fn get_folder_update(identity: Identity, db: Connections, folder_id: i64) -> Result<Markup> {
    let folder = {
        let db = db.shared()?;
        usecases::get_own_folder(&db, identity.id(), folder_id.into())?
    };
    let data = view::FormData::default().with_value("name", folder.name);
    Ok(view::folder_form(
        "Rename the destination folder",
        identity.account(),
        &format!("/destination_folders/update/{folder_id}"),
        &data,
    ))
}

#[post("/destination_folders/update/<folder_id>", data = "<form>")]
pub fn post_folder_update(
    identity: Identity,
    db: Connections,
    folder_id: i64,
    form: Form<Contextual<'_, FolderForm>>,
) -> Result {
    let form = form.into_inner();
    if let Some(FolderForm { name }) = form.value {
        flows::rename_folder(&db, identity.id(), folder_id.into(), name.clone())?;
        return Ok(Flash::success(
            Redirect::to(uri!(get_folders)),
            format!("Destination folder {name} has been updated!"),
        )
        .into());
    }
    {
        let db = db.shared()?;
        usecases::get_own_folder(&db, identity.id(), folder_id.into())?;
    }
    let data = view::FormData::from_context(&form.context, FIELDS);
    Ok(view::folder_form(
        "Rename the destination folder",
        identity.account(),
        &format!("/destination_folders/update/{folder_id}"),
        &data,
    )
    .into())
}

#[post("/destination_folders/<folder_id>/delete", rank = 2)]
pub fn post_folder_delete(
    identity: Identity,
    db: Connections,
    folder_id: i64,
) -> Result<Flash<Redirect>> {
    flows::delete_folder(&db, identity.id(), folder_id.into())?;
    Ok(Flash::success(
        Redirect::to(uri!(get_folders)),
        "The Destination Folder has been deleted",
    ))
}

#[get("/destination_folders/<folder_id>?<page>")]
pub fn get_folder(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
    folder_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (folder, posts) = {
        let db = db.shared()?;
        let folder = usecases::get_own_folder(&db, identity.id(), folder_id.into())?;
        let posts = db.posts_in_folder(folder.id, &PageRequest::new(page, POSTS_PER_PAGE))?;
        (folder, usecases::load_post_page_details(&db, posts)?)
    };
    Ok(view::posts(
        &folder.name,
        Some(identity.account()),
        flash,
        &format!("/destination_folders/{folder_id}"),
        &posts,
    ))
}

#[get("/save_destination/select_folder/<post_id>")]
pub fn get_select_folder(identity: Identity, db: Connections, post_id: i64) -> Result<Markup> {
    let (post, folders) = {
        let db = db.shared()?;
        let post = db.get_post(post_id.into())?;
        (post, db.folders_of_account(identity.id())?)
    };
    Ok(view::select_folder(identity.account(), post.id, &folders))
}

fn save_destination(
    identity: &Identity,
    db: &Connections,
    post_id: PostId,
    folder_id: FolderId,
    saved: &'static str,
) -> Result<Flash<Redirect>> {
    let back = Redirect::to(uri!(get_folder(folder_id.to_inner(), _)));
    match flows::save_destination(db, identity.id(), folder_id, post_id) {
        Ok(()) => Ok(Flash::success(back, saved)),
        Err(AppError::Business(BusinessError::DestinationAlreadySaved)) => Ok(Flash::error(
            back,
            "The Destination Folder already contains that post",
        )),
        Err(err) => Err(err.into()),
    }
}

#[post("/save_destination/select_folder/<post_id>/<folder_id>")]
pub fn post_save_destination(
    identity: Identity,
    db: Connections,
    post_id: i64,
    folder_id: i64,
) -> Result<Flash<Redirect>> {
    save_destination(
        &identity,
        &db,
        post_id.into(),
        folder_id.into(),
        "Destination saved to your folder!",
    )
}

#[post("/select_folder/<post_id>/<folder_id>")]
pub fn post_add_destination(
    identity: Identity,
    db: Connections,
    post_id: i64,
    folder_id: i64,
) -> Result<Flash<Redirect>> {
    save_destination(
        &identity,
        &db,
        post_id.into(),
        folder_id.into(),
        "Post added to the Destination Folder!",
    )
}
