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
use rove_application::prelude as flows;
use rove_core::{
    pagination::{PageRequest, TODOS_PER_PAGE},
    repositories::ToDoRepo,
    usecases::{self, ToDoContent},
};

#[derive(Debug, FromForm)]
pub struct ToDoForm {
    #[field(validate = len(1..=20))]
    name: String,
    #[field(validate = len(..=100))]
    description: String,
}

const FIELDS: &[&str] = &["name", "description"];

impl From<ToDoForm> for ToDoContent {
    fn from(from: ToDoForm) -> Self {
        let ToDoForm { name, description } = from;
        Self { name, description }
    }
}

#[get("/to_do?<page>")]
pub fn get_todos(
    identity: Identity,
    flash: Option<FlashMessage>,
    db: Connections,
    page: Option<u64>,
) -> Result<Markup> {
    let todos = db
        .shared()?
        .todos_of_account(identity.id(), &PageRequest::new(page, TODOS_PER_PAGE))?;
    Ok(view::todos(identity.account(), flash, &todos))
}

#[get("/to_do/create")]
pub fn get_todo_create(identity: Identity) -> Markup {
    view::todo_form(
        "New to do item",
        identity.account(),
        "/to_do/create",
        &view::FormData::default(),
    )
}

#[post("/to_do/create", data = "<form>")]
pub fn post_todo_create(
    identity: Identity,
    db: Connections,
    form: Form<Contextual<'_, ToDoForm>>,
) -> Result {
    let form = form.into_inner();
    let Some(todo) = form.value else {
        let data = view::FormData::from_context(&form.context, FIELDS);
        return Ok(
            view::todo_form("New to do item", identity.account(), "/to_do/create", &data).into(),
        );
    };
    flows::create_todo(&db, identity.id(), todo.into())?;
    Ok(Flash::success(Redirect::to(uri!(get_todos(_))), "To Do List Updated!").into())
}

#[get("/to_do/modify/<list_id>")]
pub fn get_todo_modify(identity: Identity, db: Connections, list_id: i64) -> Result<Markup> {
    let todo = {
        let db = db.shared()?;
        usecases::get_own_todo(&db, identity.id(), list_id.into())?
    };
    let data = view::FormData::default()
        .with_value("name", todo.name)
        .with_value("description", todo.description);
    Ok(view::todo_form(
        "Modify to do item",
        identity.account(),
        &format!("/to_do/modify/{list_id}"),
        &data,
    ))
}

#[post("/to_do/modify/<list_id>", data = "<form>")]
pub fn post_todo_modify(
    identity: Identity,
    db: Connections,
    list_id: i64,
    form: Form<Contextual<'_, ToDoForm>>,
) -> Result {
    let form = form.into_inner();
    if let Some(todo) = form.value {
        flows::update_todo(&db, identity.id(), list_id.into(), todo.into())?;
        return Ok(Flash::success(
            Redirect::to(uri!(get_todos(_))),
            "Your To Do List Has Been Updated!",
        )
        .into());
    }
    {
        let db = db.shared()?;
        usecases::get_own_todo(&db, identity.id(), list_id.into())?;
    }
    let data = view::FormData::from_context(&form.context, FIELDS);
    Ok(view::todo_form(
        "Modify to do item",
        identity.account(),
        &format!("/to_do/modify/{list_id}"),
        &data,
    )
    .into())
}

#[post("/to_do/<user_id>/delete/<list_id>")]
pub fn post_todo_complete(
    identity: Identity,
    db: Connections,
    user_id: i64,
    list_id: i64,
) -> Result {
    if !identity.is(user_id) {
        return Ok(super::redirect_home());
    }
    let todo = flows::complete_todo(&db, identity.id(), list_id.into())?;
    debug!("Completed to do item {}", todo.name);
    Ok(Flash::success(
        Redirect::to(uri!(get_todos(_))),
        "The To Do List Item has been Completed!",
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn create_todo<'c>(client: &'c Client, name: &str) -> LocalResponse<'c> {
        client
            .post("/to_do/create")
            .header(ContentType::Form)
            .body(format!("name={name}&description=Before+October"))
            .dispatch()
    }

    #[test]
    fn manage_own_to_do_list() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");

        let res = create_todo(&client, "Book+ferry");
        assert_eq!(res.headers().get_one("Location"), Some("/to_do"));
        let body = client.get("/to_do").dispatch().into_string().unwrap();
        assert!(body.contains("To Do List Updated!"));
        assert!(body.contains("Book ferry"));
        let todo = todos_of(&db, alice).remove(0);

        let body = client
            .get(format!("/to_do/modify/{}", todo.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("Before October"));
        client
            .post(format!("/to_do/modify/{}", todo.id))
            .header(ContentType::Form)
            .body("name=Book+train&description=")
            .dispatch();
        let body = client.get("/to_do").dispatch().into_string().unwrap();
        assert!(body.contains("Your To Do List Has Been Updated!"));
        assert_eq!(todos_of(&db, alice)[0].name, "Book train");

        let res = client
            .post(format!("/to_do/{alice}/delete/{}", todo.id))
            .dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/to_do"));
        let body = client.get("/to_do").dispatch().into_string().unwrap();
        assert!(body.contains("The To Do List Item has been Completed!"));
        assert!(todos_of(&db, alice).is_empty());
    }

    #[test]
    fn reject_missing_name() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        login(&client, "alice");
        let res = create_todo(&client, "");
        assert_eq!(res.status(), Status::Ok);
        assert!(todos_of(&db, alice).is_empty());
    }

    #[test]
    fn only_the_owner_can_modify_or_complete_an_item() {
        let (client, db, _images) = setup();
        let alice = register_account(&db, "alice");
        let bob = register_account(&db, "bob");
        login(&client, "alice");
        create_todo(&client, "Book+ferry");
        let todo = todos_of(&db, alice).remove(0);
        client.post("/logout").dispatch();
        login(&client, "bob");

        let res = client.get(format!("/to_do/modify/{}", todo.id)).dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/"));
        for user_id in [bob, alice] {
            let res = client
                .post(format!("/to_do/{user_id}/delete/{}", todo.id))
                .dispatch();
            assert_eq!(res.headers().get_one("Location"), Some("/"));
        }
        assert_eq!(todos_of(&db, alice).len(), 1);
    }
}
