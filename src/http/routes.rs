//! Todo route handlers.

use super::ApiError;
use super::extract::{ApiJson, ApiPath};
use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::TodoRepository,
    services::TodoService,
};
use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};

const ADDED_MESSAGE: &str = "Todo added successfully";
const UPDATED_MESSAGE: &str = "Todo updated successfully";
const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// Request body for `POST /addtodo`.
#[derive(Debug, Deserialize)]
struct AddTodoBody {
    task: String,
    #[serde(default)]
    completed: bool,
}

/// Request body for `PUT /todos/{todo_id}/complete`.
#[derive(Debug, Deserialize)]
struct CompleteTodoBody {
    completed: bool,
}

/// Wire representation of a todo.
#[derive(Debug, Serialize)]
struct TodoBody {
    id: i32,
    task: String,
    completed: bool,
}

impl From<Todo> for TodoBody {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().value(),
            completed: todo.completed(),
            task: todo.description().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct TodoMessageBody {
    message: &'static str,
    todo: TodoBody,
}

/// Builds the todo routes over the given service.
#[must_use]
pub fn todo_routes<R>(service: TodoService<R>) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/todos", get(list_todos::<R>))
        .route("/addtodo", post(add_todo::<R>))
        .route("/deletetodo/{todo_id}", delete(delete_todo::<R>))
        .route("/todos/{todo_id}/complete", put(complete_todo::<R>))
        .with_state(service)
}

async fn list_todos<R>(
    State(service): State<TodoService<R>>,
) -> Result<Json<Vec<TodoBody>>, ApiError>
where
    R: TodoRepository + 'static,
{
    let todos = service.list().await?;
    Ok(Json(todos.into_iter().map(TodoBody::from).collect()))
}

async fn add_todo<R>(
    State(service): State<TodoService<R>>,
    ApiJson(body): ApiJson<AddTodoBody>,
) -> Result<Json<TodoMessageBody>, ApiError>
where
    R: TodoRepository + 'static,
{
    let new_todo = NewTodo::new(body.task).with_completed(body.completed);
    let todo = service.create(new_todo).await?;
    Ok(Json(TodoMessageBody {
        message: ADDED_MESSAGE,
        todo: todo.into(),
    }))
}

async fn delete_todo<R>(
    State(service): State<TodoService<R>>,
    ApiPath(todo_id): ApiPath<TodoId>,
) -> Result<Json<MessageBody>, ApiError>
where
    R: TodoRepository + 'static,
{
    service.delete(todo_id).await?;
    Ok(Json(MessageBody {
        message: DELETED_MESSAGE,
    }))
}

async fn complete_todo<R>(
    State(service): State<TodoService<R>>,
    ApiPath(todo_id): ApiPath<TodoId>,
    ApiJson(body): ApiJson<CompleteTodoBody>,
) -> Result<Json<TodoMessageBody>, ApiError>
where
    R: TodoRepository + 'static,
{
    let todo = service.complete(todo_id, body.completed).await?;
    Ok(Json(TodoMessageBody {
        message: UPDATED_MESSAGE,
        todo: todo.into(),
    }))
}
