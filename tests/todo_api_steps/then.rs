//! Then steps for todo API BDD scenarios.

use super::world::{TodoWorld, run_async};
use crate::test_helpers::send;
use axum::http::Method;
use rstest_bdd_macros::then;
use serde_json::{Value, json};

fn expect_todo(
    actual: &Value,
    todo_id: u64,
    task: &str,
    completed: bool,
) -> Result<(), eyre::Report> {
    let expected = json!({ "id": todo_id, "task": task, "completed": completed });
    eyre::ensure!(*actual == expected, "expected todo {expected}, found {actual}");
    Ok(())
}

#[then("the response status is {status:u16}")]
fn response_status(world: &TodoWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))?;
    eyre::ensure!(
        actual.as_u16() == status,
        "expected status {status}, found {actual}"
    );
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let body = world.body()?;
    eyre::ensure!(
        body["message"] == json!(message),
        "expected message {message:?}, found {body}"
    );
    Ok(())
}

#[then(r#"the response detail is "{detail}""#)]
fn response_detail(world: &TodoWorld, detail: String) -> Result<(), eyre::Report> {
    let body = world.body()?;
    eyre::ensure!(
        body["detail"] == json!(detail),
        "expected detail {detail:?}, found {body}"
    );
    Ok(())
}

#[then(r#"the returned todo is #{todo_id:u64} "{task}" and open"#)]
fn returned_open_todo(world: &TodoWorld, todo_id: u64, task: String) -> Result<(), eyre::Report> {
    expect_todo(&world.body()?["todo"], todo_id, &task, false)
}

#[then(r#"the returned todo is #{todo_id:u64} "{task}" and completed"#)]
fn returned_completed_todo(
    world: &TodoWorld,
    todo_id: u64,
    task: String,
) -> Result<(), eyre::Report> {
    expect_todo(&world.body()?["todo"], todo_id, &task, true)
}

#[then(r#"the listing contains exactly todo #{todo_id:u64} "{task}" and open"#)]
fn listing_contains_single_todo(
    world: &TodoWorld,
    todo_id: u64,
    task: String,
) -> Result<(), eyre::Report> {
    let todos = world
        .body()?
        .as_array()
        .ok_or_else(|| eyre::eyre!("listing is not an array"))?;
    eyre::ensure!(todos.len() == 1, "expected one todo, found {}", todos.len());
    let todo = todos
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one todo"))?;
    expect_todo(todo, todo_id, &task, false)
}

#[then("the todo list is empty")]
fn todo_list_is_empty(world: &TodoWorld) -> Result<(), eyre::Report> {
    let listed = run_async(send(&world.app, Method::GET, "/todos", None))?;
    eyre::ensure!(
        listed.body == json!([]),
        "expected an empty listing, found {}",
        listed.body
    );
    Ok(())
}
