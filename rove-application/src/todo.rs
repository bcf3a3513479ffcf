use super::*;

pub fn create_todo(
    connections: &sqlite::Connections,
    account_id: AccountId,
    content: usecases::ToDoContent,
) -> Result<ToDoId> {
    run_in_transaction(connections, |conn| {
        usecases::create_todo(conn, account_id, content)
    })
}

pub fn update_todo(
    connections: &sqlite::Connections,
    account_id: AccountId,
    todo_id: ToDoId,
    content: usecases::ToDoContent,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::update_todo(conn, account_id, todo_id, content)
    })
}

pub fn complete_todo(
    connections: &sqlite::Connections,
    account_id: AccountId,
    todo_id: ToDoId,
) -> Result<ToDo> {
    run_in_transaction(connections, |conn| {
        usecases::complete_todo(conn, account_id, todo_id)
    })
}
