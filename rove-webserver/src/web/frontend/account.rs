use maud::Markup;
use rocket::{
    self,
    form::{self, Contextual, Form},
    get,
    http::CookieJar,
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::usecases::{self, Error as BusinessError};

#[derive(Debug, FromForm)]
pub struct ProfileForm {
    #[field(validate = len(1..=16))]
    user_name: String,
    #[field(validate = len(1..=40))]
    location: String,
    #[field(validate = len(1..=20))]
    first_name: String,
    #[field(validate = len(1..=20))]
    last_name: String,
}

impl ProfileForm {
    const FIELDS: &'static [&'static str] =
        &["user_name", "location", "first_name", "last_name"];
}

impl From<ProfileForm> for usecases::ProfileUpdate {
    fn from(from: ProfileForm) -> Self {
        let ProfileForm {
            user_name,
            location,
            first_name,
            last_name,
        } = from;
        Self {
            user_name,
            location,
            first_name,
            last_name,
        }
    }
}

#[get("/account")]
pub fn get_account(identity: Identity, flash: Option<FlashMessage>) -> Markup {
    view::account(identity.account(), flash)
}

#[get("/account/modify")]
pub fn get_account_modify(identity: Identity) -> Markup {
    let account = identity.account();
    let data = view::FormData::default()
        .with_value("user_name", &account.user_name)
        .with_value("location", &account.location)
        .with_value("first_name", &account.first_name)
        .with_value("last_name", &account.last_name);
    view::modify_account(account, &data)
}

#[post("/account/modify", data = "<form>")]
pub fn post_account_modify(
    identity: Identity,
    db: Connections,
    form: Form<Contextual<'_, ProfileForm>>,
) -> Result {
    let mut form = form.into_inner();
    if let Some(update) = form.value.take() {
        match flows::update_profile(&db, identity.id(), update.into()) {
            Ok(()) => {
                return Ok(Flash::success(
                    Redirect::to(uri!(get_account)),
                    "Your account has been updated!",
                )
                .into());
            }
            Err(AppError::Business(BusinessError::UserNameTaken)) => {
                form.context.push_error(
                    form::Error::validation(
                        "That username is taken. Please choose a different one.",
                    )
                    .with_name("user_name"),
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
    let data = view::FormData::from_context(&form.context, ProfileForm::FIELDS);
    Ok(view::modify_account(identity.account(), &data).into())
}

#[post("/account/delete")]
pub fn post_account_delete(
    identity: Identity,
    db: Connections,
    images: &Images,
    cookies: &CookieJar<'_>,
) -> Result<Redirect> {
    cookies.remove_private(COOKIE_ACCOUNT_KEY);
    flows::delete_account(&db, images.storage(), identity.id())?;
    info!("Deleted account {}", identity.id());
    Ok(Redirect::to(uri!(super::get_index)))
}
