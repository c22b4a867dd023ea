//! Archive resources: volumes, authors, verses, and the four glossary
//! sub-resources.

use tatvapada_shared::{
    GlossaryEntry, GlossaryKind, Samputa, Tatvapada, TatvapadaSummary, Tatvapadakara,
};

use super::{
    build_url, delete, endpoints, get_json, post_json, ApiError, ListQuery, Paged,
};

/// All volumes, ordered by volume number server-side.
pub async fn fetch_samputas() -> Result<Vec<Samputa>, ApiError> {
    get_json(&build_url(endpoints::SAMPUTA_LIST, &ListQuery::default())).await
}

/// Creates a volume (or updates its title/editor if the number exists).
pub async fn save_samputa(samputa: &Samputa) -> Result<Samputa, ApiError> {
    post_json(&build_url(endpoints::SAMPUTA_LIST, &ListQuery::default()), samputa).await
}

/// Authors who have verses in one volume, the second cascade level.
pub async fn fetch_tatvapadakaras_in_samputa(
    samputa: &str,
) -> Result<Vec<Tatvapadakara>, ApiError> {
    let path = endpoints::render(endpoints::TATVAPADAKARA_BY_SAMPUTA, &[("samputa", samputa)])?;
    get_json(&build_url(&path, &ListQuery::default())).await
}

/// Paginated author listing for the authors tab.
pub async fn fetch_tatvapadakaras(
    query: &ListQuery,
) -> Result<Paged<Tatvapadakara>, ApiError> {
    get_json(&build_url(endpoints::TATVAPADAKARA_LIST, query)).await
}

/// Creates or updates an author keyed by name.
pub async fn save_tatvapadakara(author: &Tatvapadakara) -> Result<Tatvapadakara, ApiError> {
    post_json(
        &build_url(endpoints::TATVAPADAKARA_LIST, &ListQuery::default()),
        author,
    )
    .await
}

/// Removes an author. The backend refuses to delete an author who still has
/// verses, which surfaces here as a `Status` error.
pub async fn delete_tatvapadakara(hesaru: &str) -> Result<(), ApiError> {
    let path = endpoints::render(endpoints::TATVAPADAKARA_DETAIL, &[("hesaru", hesaru)])?;
    delete(&build_url(&path, &ListQuery::default())).await
}

/// Verse summaries for one volume and author, the third cascade level.
pub async fn fetch_tatvapada_summaries(
    samputa: &str,
    hesaru: &str,
) -> Result<Vec<TatvapadaSummary>, ApiError> {
    let path = endpoints::render(
        endpoints::TATVAPADA_BY_AUTHOR,
        &[("samputa", samputa), ("hesaru", hesaru)],
    )?;
    get_json(&build_url(&path, &ListQuery::default())).await
}

/// Full verse record for form population.
pub async fn fetch_tatvapada(
    samputa: &str,
    hesaru: &str,
    sankhye: &str,
) -> Result<Tatvapada, ApiError> {
    let path = endpoints::render(
        endpoints::TATVAPADA_DETAIL,
        &[("samputa", samputa), ("hesaru", hesaru), ("sankhye", sankhye)],
    )?;
    get_json(&build_url(&path, &ListQuery::default())).await
}

/// Creates or updates a verse keyed by the (volume, author, number) triple.
pub async fn save_tatvapada(verse: &Tatvapada) -> Result<Tatvapada, ApiError> {
    post_json(&build_url(endpoints::TATVAPADA_SAVE, &ListQuery::default()), verse).await
}

/// Deletes a verse by its key triple.
pub async fn delete_tatvapada(
    samputa: &str,
    hesaru: &str,
    sankhye: &str,
) -> Result<(), ApiError> {
    let path = endpoints::render(
        endpoints::TATVAPADA_DETAIL,
        &[("samputa", samputa), ("hesaru", hesaru), ("sankhye", sankhye)],
    )?;
    delete(&build_url(&path, &ListQuery::default())).await
}

/// Glossary terms of one kind within a volume.
pub async fn fetch_glossary(
    kind: GlossaryKind,
    samputa: &str,
    query: &ListQuery,
) -> Result<Paged<GlossaryEntry>, ApiError> {
    let path = endpoints::render(
        endpoints::GLOSSARY_LIST,
        &[("kind", kind.path_segment()), ("samputa", samputa)],
    )?;
    get_json(&build_url(&path, query)).await
}

/// Creates or updates a glossary entry.
pub async fn save_glossary_entry(
    kind: GlossaryKind,
    entry: &GlossaryEntry,
) -> Result<GlossaryEntry, ApiError> {
    let path = endpoints::render(endpoints::GLOSSARY_SAVE, &[("kind", kind.path_segment())])?;
    post_json(&build_url(&path, &ListQuery::default()), entry).await
}

/// Deletes a glossary entry by server id.
pub async fn delete_glossary_entry(kind: GlossaryKind, id: u64) -> Result<(), ApiError> {
    let id = id.to_string();
    let path = endpoints::render(
        endpoints::GLOSSARY_ENTRY,
        &[("kind", kind.path_segment()), ("id", &id)],
    )?;
    delete(&build_url(&path, &ListQuery::default())).await
}
