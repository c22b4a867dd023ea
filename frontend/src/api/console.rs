//! Admin-only resources under `/admin`: documents, catalog products, users.

use tatvapada_shared::{DocumentRecord, Product, UserAccount};
use web_sys::{File, FormData};

use super::{
    build_url, delete, endpoints, get_json, post_form, post_json, put_json, ApiError,
    ListQuery, Paged,
};

fn detail_path(template: &str, id: u64) -> Result<String, ApiError> {
    let id = id.to_string();
    endpoints::render(template, &[("id", &id)])
}

fn file_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    Ok(form)
}

/// Paginated document listing with optional search.
pub async fn fetch_documents(query: &ListQuery) -> Result<Paged<DocumentRecord>, ApiError> {
    get_json(&build_url(endpoints::DOCUMENT_LIST, query)).await
}

/// Creates (no id) or updates (id set) a document's metadata.
pub async fn save_document(doc: &DocumentRecord) -> Result<DocumentRecord, ApiError> {
    match doc.id {
        None => post_json(&build_url(endpoints::DOCUMENT_LIST, &ListQuery::default()), doc).await,
        Some(id) => {
            let path = detail_path(endpoints::DOCUMENT_DETAIL, id)?;
            put_json(&build_url(&path, &ListQuery::default()), doc).await
        }
    }
}

/// Deletes a document and its stored file.
pub async fn delete_document(id: u64) -> Result<(), ApiError> {
    let path = detail_path(endpoints::DOCUMENT_DETAIL, id)?;
    delete(&build_url(&path, &ListQuery::default())).await
}

/// Uploads the binary file for an existing document record.
pub async fn upload_document_file(id: u64, file: &File) -> Result<DocumentRecord, ApiError> {
    let path = detail_path(endpoints::DOCUMENT_FILE, id)?;
    post_form(&build_url(&path, &ListQuery::default()), file_form(file)?).await
}

/// Paginated catalog listing for the admin catalog tab.
pub async fn fetch_products(query: &ListQuery) -> Result<Paged<Product>, ApiError> {
    get_json(&build_url(endpoints::PRODUCT_LIST, query)).await
}

/// Creates or updates a catalog product.
pub async fn save_product(product: &Product) -> Result<Product, ApiError> {
    match product.id {
        None => post_json(&build_url(endpoints::PRODUCT_LIST, &ListQuery::default()), product).await,
        Some(id) => {
            let path = detail_path(endpoints::PRODUCT_DETAIL, id)?;
            put_json(&build_url(&path, &ListQuery::default()), product).await
        }
    }
}

/// Removes a product from the catalog.
pub async fn delete_product(id: u64) -> Result<(), ApiError> {
    let path = detail_path(endpoints::PRODUCT_DETAIL, id)?;
    delete(&build_url(&path, &ListQuery::default())).await
}

/// Uploads a product image; the response carries the new image URL.
pub async fn upload_product_image(id: u64, file: &File) -> Result<Product, ApiError> {
    let path = detail_path(endpoints::PRODUCT_IMAGE, id)?;
    post_form(&build_url(&path, &ListQuery::default()), file_form(file)?).await
}

/// Paginated user listing with optional search.
pub async fn fetch_users(query: &ListQuery) -> Result<Paged<UserAccount>, ApiError> {
    get_json(&build_url(endpoints::USER_LIST, query)).await
}

/// Updates a user's role or active flag.
pub async fn update_user(user: &UserAccount) -> Result<UserAccount, ApiError> {
    let path = detail_path(endpoints::USER_DETAIL, user.id)?;
    put_json(&build_url(&path, &ListQuery::default()), user).await
}
