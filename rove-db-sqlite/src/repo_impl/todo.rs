use super::*;

impl From<models::ToDo> for ToDo {
    fn from(from: models::ToDo) -> Self {
        let models::ToDo {
            id,
            account_id,
            name,
            description,
        } = from;
        Self {
            id: id.into(),
            account_id: account_id.into(),
            name,
            description,
        }
    }
}

impl_repo! {
    ToDoRepo {
        write {
            fn create_todo(&self, todo: &NewToDo) -> Result<ToDoId>;
            fn update_todo(&self, todo: &ToDo) -> Result<()>;
            fn delete_todo(&self, id: ToDoId) -> Result<()>;
        }
        read {
            fn get_todo(&self, id: ToDoId) -> Result<ToDo>;
            fn todos_of_account(&self, account_id: AccountId, page: &PageRequest) -> Result<Page<ToDo>>;
        }
    }
}

fn create_todo(conn: &mut SqliteConnection, todo: &NewToDo) -> Result<ToDoId> {
    let new_todo = models::NewToDo {
        account_id: todo.account_id.to_inner(),
        name: &todo.name,
        description: &todo.description,
    };
    diesel::insert_into(schema::todo::table)
        .values(&new_todo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn update_todo(conn: &mut SqliteConnection, todo: &ToDo) -> Result<()> {
    use schema::todo::dsl;
    let count = diesel::update(dsl::todo.filter(dsl::id.eq(todo.id.to_inner())))
        .set((
            dsl::name.eq(&todo.name),
            dsl::description.eq(&todo.description),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_todo(conn: &mut SqliteConnection, id: ToDoId) -> Result<()> {
    use schema::todo::dsl;
    let count = diesel::delete(dsl::todo.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn get_todo(conn: &mut SqliteConnection, id: ToDoId) -> Result<ToDo> {
    use schema::todo::dsl;
    Ok(dsl::todo
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::ToDo>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn todos_of_account(
    conn: &mut SqliteConnection,
    account_id: AccountId,
    page: &PageRequest,
) -> Result<Page<ToDo>> {
    use schema::todo::dsl;
    let account_id = account_id.to_inner();
    let total = dsl::todo
        .filter(dsl::account_id.eq(account_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::todo
        .filter(dsl::account_id.eq(account_id))
        .order_by(dsl::id.asc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::ToDo>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}
