use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct ToDoContent {
    pub name        : String,
    pub description : String,
}

pub fn create_todo<R: ToDoRepo>(repo: &R, account_id: AccountId, content: ToDoContent) -> Result<ToDoId> {
    let ToDoContent { name, description } = content;
    let todo = NewToDo {
        account_id,
        name,
        description,
    };
    Ok(repo.create_todo(&todo)?)
}

pub fn get_own_todo<R: ToDoRepo>(repo: &R, account_id: AccountId, todo_id: ToDoId) -> Result<ToDo> {
    let todo = repo.get_todo(todo_id)?;
    if todo.account_id != account_id {
        return Err(Error::Forbidden);
    }
    Ok(todo)
}

pub fn update_todo<R: ToDoRepo>(
    repo: &R,
    account_id: AccountId,
    todo_id: ToDoId,
    content: ToDoContent,
) -> Result<()> {
    let ToDoContent { name, description } = content;
    let todo = ToDo {
        name,
        description,
        ..get_own_todo(repo, account_id, todo_id)?
    };
    Ok(repo.update_todo(&todo)?)
}

/// Completed items are removed from the list.
pub fn complete_todo<R: ToDoRepo>(repo: &R, account_id: AccountId, todo_id: ToDoId) -> Result<ToDo> {
    let todo = get_own_todo(repo, account_id, todo_id)?;
    repo.delete_todo(todo.id)?;
    Ok(todo)
}
