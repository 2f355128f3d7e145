//! The HTTP resource representing the set of todo items.

use axum::extract::State;
use axum::http::StatusCode;
use axum_macros::debug_handler;
use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

use crate::api::validate::TodoBody;
use crate::api::{Error, Json, Path, Response};
use crate::id::TodoId;
use crate::todo::Todo;
use crate::AppState;

/// A `POST` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// The new todo item's text.
    pub body: TodoBody,
}

/// Creates a new todo item. The store assigns its identifier, and it always starts out
/// incomplete.
///
/// # Errors
///
/// See [`Error`].
#[debug_handler]
pub async fn post(
    State(state): State<AppState>,
    Json(body): Json<PostRequest>,
) -> Response<TodoResponse> {
    let todo = Todo {
        id: None,
        body: body.body.into_inner(),
        completed: false,
    };

    let inserted = state.todos.insert_one(&todo).await?;

    let id = inserted
        .inserted_id
        .as_object_id()
        .expect("store should assign an object ID on insert")
        .into();

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            id,
            body: todo.body,
            completed: todo.completed,
        }),
    ))
}

/// Lists every todo item in the store.
///
/// # Errors
///
/// See [`Error`].
#[debug_handler]
pub async fn get(State(state): State<AppState>) -> Response<Vec<TodoResponse>> {
    let cursor = state
        .todos
        .find(doc! {})
        .await
        .map_err(Error::StoreUnavailable)?;

    let todos: Vec<Todo> = cursor.try_collect().await?;

    Ok((
        StatusCode::OK,
        Json(todos.into_iter().map(TodoResponse::from).collect()),
    ))
}

/// Marks the todo item with the given ID as completed. Completing an item that doesn't exist
/// (or is already completed) isn't an error, matching the store's update semantics.
///
/// # Errors
///
/// See [`Error`].
#[debug_handler]
pub async fn put(State(state): State<AppState>, Path(id): Path<TodoId>) -> Response<PutResponse> {
    state
        .todos
        .update_one(
            doc! { "_id": id.into_inner() },
            doc! { "$set": { "completed": true } },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(PutResponse {
            message: "Todo successfully completed",
        }),
    ))
}

/// Deletes the todo item with the given ID. Deleting an item that doesn't exist isn't an
/// error, matching the store's delete semantics.
///
/// # Errors
///
/// See [`Error`].
#[debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Response<DeleteResponse> {
    state
        .todos
        .delete_one(doc! { "_id": id.into_inner() })
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Todo successfully deleted",
        }),
    ))
}

/// A todo item as it appears in API response bodies, with its identifier in hexadecimal form.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// The item's store-assigned identifier.
    pub id: TodoId,

    /// The item's text.
    pub body: String,

    /// Whether the item is completed.
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo
                .id
                .expect("stored todo should have an ID")
                .into(),
            body: todo.body,
            completed: todo.completed,
        }
    }
}

/// A `PUT` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PutResponse {
    /// A message confirming the item was completed.
    pub message: &'static str,
}

/// A `DELETE` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// A message confirming the item was deleted.
    pub message: &'static str,
}
