//! General document store handling.

use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::todo::Todo;

/// The name of the store database.
const DATABASE: &str = "todo";

/// The name of the collection holding todo items.
const COLLECTION: &str = "todos";

/// Connects to the document store and returns the handle to the todo collection.
///
/// The driver connects lazily, so the store is pinged once here to make a bad connection string
/// or unreachable store fail at startup instead of on the first request.
///
/// # Errors
///
/// Fails if the connection string can't be parsed or the store doesn't answer the ping.
pub async fn initialize(uri: &str) -> mongodb::error::Result<Collection<Todo>> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(DATABASE);

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database.collection(COLLECTION))
}
