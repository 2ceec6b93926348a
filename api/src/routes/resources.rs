use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::{Value, json};

use crate::store::{Collection, ResourceStore};

use super::APIError;

#[tracing::instrument(skip(store), ret(level = "debug"))]
#[get("/{collection}")]
pub async fn list_records(
    collection: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
    store: web::Data<ResourceStore>,
) -> Result<HttpResponse, APIError> {
    let collection = Collection::parse(&collection)?;
    let records = store.list(collection, &query).await;
    Ok(HttpResponse::Ok().json(records))
}

#[tracing::instrument(skip(store, body))]
#[post("/{collection}")]
pub async fn create_record(
    collection: web::Path<String>,
    body: web::Json<Value>,
    store: web::Data<ResourceStore>,
) -> Result<HttpResponse, APIError> {
    let collection = Collection::parse(&collection)?;
    let record = store.create(collection, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

#[tracing::instrument(skip(store))]
#[get("/{collection}/{id}")]
pub async fn get_record(
    path: web::Path<(String, u64)>,
    store: web::Data<ResourceStore>,
) -> Result<HttpResponse, APIError> {
    let (collection, id) = path.into_inner();
    let collection = Collection::parse(&collection)?;
    let record = store.get(collection, id).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[tracing::instrument(skip(store, body))]
#[patch("/{collection}/{id}")]
pub async fn patch_record(
    path: web::Path<(String, u64)>,
    body: web::Json<Value>,
    store: web::Data<ResourceStore>,
) -> Result<HttpResponse, APIError> {
    let (collection, id) = path.into_inner();
    let collection = Collection::parse(&collection)?;
    let record = store.patch(collection, id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[tracing::instrument(skip(store))]
#[delete("/{collection}/{id}")]
pub async fn delete_record(
    path: web::Path<(String, u64)>,
    store: web::Data<ResourceStore>,
) -> Result<HttpResponse, APIError> {
    let (collection, id) = path.into_inner();
    let collection = Collection::parse(&collection)?;
    store.delete(collection, id).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}
