use rocket::{
    self,
    form::{self, Contextual, Form},
    get, post,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Reply, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_application::{error::AppError, prelude as flows};
use rove_core::usecases::{self, Error as BusinessError};

#[derive(Debug, FromForm)]
pub struct RegisterForm {
    #[field(validate = len(1..=16))]
    user_name: String,
    #[field(validate = len(1..=40))]
    location: String,
    #[field(validate = len(1..=20))]
    first_name: String,
    #[field(validate = len(1..=20))]
    last_name: String,
    #[field(validate = len(1..=72))]
    password: String,
    confirm_password: String,
}

impl RegisterForm {
    const FIELDS: &'static [&'static str] = &[
        "user_name",
        "location",
        "first_name",
        "last_name",
        "password",
        "confirm_password",
    ];
}

impl From<RegisterForm> for usecases::Registration {
    fn from(from: RegisterForm) -> Self {
        let RegisterForm {
            user_name,
            location,
            first_name,
            last_name,
            password,
            confirm_password: _,
        } = from;
        Self {
            user_name,
            location,
            first_name,
            last_name,
            password,
        }
    }
}

#[get("/register")]
pub fn get_register(identity: Option<Identity>) -> Reply {
    if identity.is_some() {
        return super::redirect_home();
    }
    view::register(&view::FormData::default()).into()
}

#[post("/register", data = "<form>")]
pub fn post_register(
    identity: Option<Identity>,
    db: Connections,
    form: Form<Contextual<'_, RegisterForm>>,
) -> Result {
    if identity.is_some() {
        return Ok(super::redirect_home());
    }
    let mut form = form.into_inner();
    if let Some(registration) = form.value.take() {
        if registration.password != registration.confirm_password {
            form.context.push_error(
                form::Error::validation("Field must be equal to password.")
                    .with_name("confirm_password"),
            );
        } else {
            let user_name = registration.user_name.clone();
            match flows::register_account(&db, registration.into()) {
                Ok(_) => {
                    return Ok(Flash::success(
                        Redirect::to(uri!(super::login::get_login(_))),
                        format!("Account created for {user_name}! You can now log in!"),
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
    }
    let data = view::FormData::from_context(&form.context, RegisterForm::FIELDS);
    Ok(view::register(&data).into())
}
