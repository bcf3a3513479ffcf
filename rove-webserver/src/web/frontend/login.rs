use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    time::{Duration, OffsetDateTime},
    uri, FromForm,
};

use super::{view, Reply, Result};
use crate::web::{guards::*, sqlite::Connections};
use rove_core::usecases::{self, Error as BusinessError};

const LOGIN_FAILED: &str = "Incorrect login information. Please try again";

/// How long "remember me" keeps a session alive.
const REMEMBER_DAYS: i64 = 30;

#[derive(FromForm)]
pub struct LoginForm<'r> {
    user_name: &'r str,
    password: &'r str,
    remember: bool,
    next: Option<&'r str>,
}

#[get("/login?<next>")]
pub fn get_login(
    identity: Option<Identity>,
    flash: Option<FlashMessage>,
    next: Option<&str>,
) -> Reply {
    if identity.is_some() {
        return super::redirect_home();
    }
    view::login(flash, &view::FormData::default(), next).into()
}

#[post("/login", data = "<form>")]
pub fn post_login(
    identity: Option<Identity>,
    db: Connections,
    form: Form<LoginForm<'_>>,
    cookies: &CookieJar<'_>,
) -> Result {
    if identity.is_some() {
        return Ok(super::redirect_home());
    }
    let login = usecases::Credentials {
        user_name: form.user_name,
        password: form.password,
    };
    let result = {
        let db = db.shared()?;
        usecases::login_with_user_name(&db, &login)
    };
    match result {
        Ok(account) => {
            let cookie = Cookie::build((COOKIE_ACCOUNT_KEY, account.id.to_string()))
                .http_only(true)
                .same_site(SameSite::Lax);
            let lifetime = Duration::days(REMEMBER_DAYS);
            let cookie = if form.remember {
                cookie
                    .max_age(lifetime)
                    .expires(OffsetDateTime::now_utc() + lifetime)
            } else {
                // Ends with the browser session
                cookie.expires(None::<OffsetDateTime>)
            };
            cookies.add_private(cookie);
            debug!("Account {} logged in", account.id);
            let target = form
                .next
                .filter(|next| is_local_path(next))
                .unwrap_or("/")
                .to_string();
            Ok(Redirect::to(target).into())
        }
        Err(BusinessError::Credentials) => {
            let data = view::FormData::default()
                .with_value("user_name", form.user_name)
                .with_error("", LOGIN_FAILED);
            Ok(view::login(None, &data, form.next).into())
        }
        Err(err) => Err(err.into()),
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_ACCOUNT_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
