use maud::Markup;
use rocket::{
    self,
    form::{self, Contextual, Form},
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::{
    entities::*,
    pagination::{
        PageRequest, LODGINGS_PER_PAGE, VISITS_OF_LODGING_PAGE_PER_PAGE, VISITS_PER_PAGE,
    },
    repositories::{LodgingRepo, PostRepo},
    usecases::{self, Error as BusinessError},
};

#[derive(Debug, FromForm)]
pub struct LodgingForm {
    #[field(validate = len(1..=30))]
    name: String,
    #[field(validate = len(1..=40))]
    location: String,
}

const LODGING_FIELDS: &[&str] = &["name", "location"];

#[derive(Debug, FromForm)]
pub struct VisitForm {
    cost: u32,
    #[field(validate = range(1..=5))]
    rating: u8,
    #[field(validate = len(1..=60))]
    comment: String,
}

const VISIT_FIELDS: &[&str] = &["cost", "rating", "comment"];

#[get("/lodgings?<page>")]
pub fn get_lodgings(
    identity: Option<Identity>,
    flash: Option<FlashMessage>,
    db: Connections,
    page: Option<u64>,
) -> Result<Markup> {
    let lodgings = db
        .shared()?
        .all_lodgings(&PageRequest::new(page, LODGINGS_PER_PAGE))?;
    Ok(view::lodgings(
        identity.as_ref().map(Identity::account),
        flash,
        &lodgings,
    ))
}

#[get("/lodgings/create")]
pub fn get_lodging_create(identity: Identity) -> Markup {
    view::lodging_form(identity.account(), &view::FormData::default())
}

#[post("/lodgings/create", data = "<form>")]
pub fn post_lodging_create(
    identity: Identity,
    db: Connections,
    form: Form<Contextual<'_, LodgingForm>>,
) -> Result {
    let form = form.into_inner();
    let Some(LodgingForm { name, location }) = form.value else {
        let data = view::FormData::from_context(&form.context, LODGING_FIELDS);
        return Ok(view::lodging_form(identity.account(), &data).into());
    };
    flows::create_lodging(&db, NewLodging { name, location })?;
    Ok(Flash::success(
        Redirect::to(uri!(get_lodgings(_))),
        "New lodging has been created!",
    )
    .into())
}

#[get("/lodging/<lodging_id>?<page>")]
pub fn get_lodging(
    identity: Option<Identity>,
    db: Connections,
    lodging_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (lodging, visits) = {
        let db = db.shared()?;
        let lodging = db.get_lodging(lodging_id.into())?;
        let visits = db.visits_of_lodging(
            lodging.id,
            &PageRequest::new(page, VISITS_OF_LODGING_PAGE_PER_PAGE),
        )?;
        (lodging, usecases::load_visit_page_posts(&db, visits)?)
    };
    Ok(view::lodging(
        identity.as_ref().map(Identity::account),
        &lodging,
        &visits,
    ))
}

#[get("/lodging/<lodging_id>/visits?<page>")]
pub fn get_lodging_visits(
    identity: Option<Identity>,
    db: Connections,
    lodging_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (lodging, visits) = {
        let db = db.shared()?;
        let lodging = db.get_lodging(lodging_id.into())?;
        let visits =
            db.visits_of_lodging(lodging.id, &PageRequest::new(page, VISITS_PER_PAGE))?;
        (lodging, usecases::load_visit_page_posts(&db, visits)?)
    };
    Ok(view::lodging_visits(
        identity.as_ref().map(Identity::account),
        &lodging,
        &visits,
    ))
}

#[get("/post/<post_id>/select_lodging?<page>")]
pub fn get_select_lodging(
    identity: Identity,
    db: Connections,
    post_id: i64,
    page: Option<u64>,
) -> Result<Markup> {
    let (post, lodgings) = {
        let db = db.shared()?;
        let post = usecases::get_own_post(&db, identity.id(), post_id.into())?;
        (
            post,
            db.all_lodgings(&PageRequest::new(page, LODGINGS_PER_PAGE))?,
        )
    };
    Ok(view::select_lodging(identity.account(), post.id, &lodgings))
}

fn load_own_post_and_lodging(
    db: &Connections,
    identity: &Identity,
    post_id: PostId,
    lodging_id: LodgingId,
) -> Result<(Post, Lodging)> {
    let db = db.shared()?;
    let post = usecases::get_own_post(&db, identity.id(), post_id)?;
    let lodging = db.get_lodging(lodging_id)?;
    Ok((post, lodging))
}

#[get("/post/<post_id>/add/lodging/<lodging_id>")]
pub fn get_visit_create(
    identity: Identity,
    db: Connections,
    post_id: i64,
    lodging_id: i64,
) -> Result<Markup> {
    let (post, lodging) =
        load_own_post_and_lodging(&db, &identity, post_id.into(), lodging_id.into())?;
    Ok(view::visit_form(
        identity.account(),
        post.id,
        &lodging,
        &view::FormData::default(),
    ))
}

#[post("/post/<post_id>/add/lodging/<lodging_id>", data = "<form>")]
pub fn post_visit_create(
    identity: Identity,
    db: Connections,
    post_id: i64,
    lodging_id: i64,
    form: Form<Contextual<'_, VisitForm>>,
) -> Result {
    let (post, lodging) =
        load_own_post_and_lodging(&db, &identity, post_id.into(), lodging_id.into())?;
    let mut form = form.into_inner();
    if let Some(VisitForm {
        cost,
        rating,
        comment,
    }) = form.value.take()
    {
        let visit = NewLodgingVisit {
            post_id: post.id,
            lodging_id: lodging.id,
            cost,
            rating,
            comment,
        };
        let back = Redirect::to(uri!(super::post::get_your_posts(identity.id().to_inner(), _)));
        match flows::add_lodging_visit(&db, identity.id(), visit) {
            Ok(_) => {
                return Ok(
                    Flash::success(back, "The Lodging visit has been added to your Post!").into(),
                );
            }
            Err(AppError::Business(BusinessError::LodgingVisitExists)) => {
                return Ok(Flash::error(back, "The Post already has a lodging visit").into());
            }
            Err(AppError::Business(BusinessError::RatingValue)) => {
                form.context.push_error(
                    form::Error::validation("The rating must be between 1 and 5.")
                        .with_name("rating"),
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
    let data = view::FormData::from_context(&form.context, VISIT_FIELDS);
    Ok(view::visit_form(identity.account(), post.id, &lodging, &data).into())
}

#[get("/<post_id>/visit", rank = 2)]
pub fn get_post_visit(identity: Identity, db: Connections, post_id: i64) -> Result<Markup> {
    let (post, visit, lodging) = {
        let db = db.shared()?;
        let post = db.get_post(post_id.into())?;
        let Some(visit) = db.try_get_visit_of_post(post.id)? else {
            return Err(rove_core::repositories::Error::NotFound.into());
        };
        let lodging = db.get_lodging(visit.lodging_id)?;
        (post, visit, lodging)
    };
    Ok(view::visit(identity.account(), &post, &visit, &lodging))
}
