//! Ad handlers.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use common::{AppError, AppResult, Envelope};

use crate::extractors::BodyJson;
use crate::presenters::{
    AdResponse, AdsQuery, ChangeAdStatusRequest, CreateAdRequest, DeleteAdRequest, SearchQuery,
    UpdateAdRequest,
};
use crate::state::AppState;

use super::parse_id;

fn ad_envelope(ad: domain::Ad) -> Response {
    Json(Envelope::data(AdResponse::from(ad))).into_response()
}

fn ads_envelope(ads: Vec<domain::Ad>) -> Response {
    let ads: Vec<AdResponse> = ads.into_iter().map(AdResponse::from).collect();
    Json(Envelope::data(ads)).into_response()
}

/// Multiplexed listing endpoint: `?ad_id=` fetches one ad, `?filter=author`
/// and `?filter=date` select the corresponding filtered listing, and no
/// parameters mean the published feed.
#[utoipa::path(
    get,
    path = "/api/v1/ads",
    tag = "Ads",
    params(
        ("ad_id" = Option<String>, Query, description = "Fetch a single ad by identifier"),
        ("filter" = Option<String>, Query, description = "`author` or `date`"),
        ("author_id" = Option<String>, Query, description = "Author identifier for `filter=author`"),
        ("day" = Option<String>, Query, description = "Day of month for `filter=date`")
    ),
    responses(
        (status = 200, description = "Ad or ad list", body = AdResponse),
        (status = 400, description = "Unparsable identifier or empty result")
    )
)]
pub async fn get_ads(
    State(state): State<AppState>,
    Query(query): Query<AdsQuery>,
) -> AppResult<Response> {
    if let Some(raw) = query.ad_id.as_deref() {
        return get_ad(&state, raw).await;
    }

    match query.filter.as_deref() {
        Some("author") => list_ads_by_author(&state, query.author_id.as_deref()).await,
        Some("date") => list_ads_by_day(&state, query.day.as_deref()).await,
        _ => list_ads(&state).await,
    }
}

async fn get_ad(state: &AppState, raw_id: &str) -> AppResult<Response> {
    let ad_id = parse_id(raw_id, "ad id")?;
    let ad = state.ads.get_ad(ad_id).await?;

    info!(ad_id, "fetched ad");
    Ok(ad_envelope(ad))
}

async fn list_ads(state: &AppState) -> AppResult<Response> {
    let ads = state.ads.list_ads().await?;

    info!(count = ads.len(), "listed published ads");
    Ok(ads_envelope(ads))
}

async fn list_ads_by_author(state: &AppState, raw_author: Option<&str>) -> AppResult<Response> {
    let author_id = parse_id(raw_author.unwrap_or_default(), "author id")?;
    let ads = state.ads.list_ads_by_author(author_id).await?;

    info!(author_id, count = ads.len(), "listed ads by author");
    Ok(ads_envelope(ads))
}

async fn list_ads_by_day(state: &AppState, raw_day: Option<&str>) -> AppResult<Response> {
    let day = parse_id(raw_day.unwrap_or_default(), "day")?;
    let ads = state.ads.list_ads_by_day(day).await?;

    info!(day, count = ads.len(), "listed ads by creation day");
    Ok(ads_envelope(ads))
}

/// Title-prefix search; drafts are included by design.
#[utoipa::path(
    get,
    path = "/api/v1/ads/search",
    tag = "Ads",
    params(("title" = Option<String>, Query, description = "Title prefix")),
    responses(
        (status = 200, description = "Matching ads", body = [AdResponse]),
        (status = 404, description = "Nothing matched")
    )
)]
pub async fn search_ads(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Envelope<Vec<AdResponse>>>> {
    let prefix = query.title.unwrap_or_default();
    let ads = state.ads.search_ads_by_title(&prefix).await?;

    info!(%prefix, count = ads.len(), "searched ads");
    Ok(Json(Envelope::data(
        ads.into_iter().map(AdResponse::from).collect(),
    )))
}

/// Create a draft ad. The author must already exist in the user registry.
#[utoipa::path(
    post,
    path = "/api/v1/ads",
    tag = "Ads",
    request_body = CreateAdRequest,
    responses(
        (status = 200, description = "Created draft", body = AdResponse),
        (status = 400, description = "Invalid fields or unregistered author")
    )
)]
pub async fn create_ad(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<CreateAdRequest>,
) -> AppResult<Json<Envelope<AdResponse>>> {
    if state.users.check_user(req.user_id).await.is_err() {
        info!(user_id = req.user_id, "rejected ad from unregistered author");
        return Err(AppError::bad_request("author is not registered"));
    }

    let ad = state.ads.create_ad(req.title, req.text, req.user_id).await?;

    info!(ad_id = ad.id, author_id = ad.author_id, "created ad");
    Ok(Json(Envelope::data(AdResponse::from(ad))))
}

#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}/status",
    tag = "Ads",
    params(("ad_id" = String, Path, description = "Ad identifier")),
    request_body = ChangeAdStatusRequest,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 403, description = "Requester is not the author")
    )
)]
pub async fn change_ad_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    BodyJson(req): BodyJson<ChangeAdStatusRequest>,
) -> AppResult<Json<Envelope<AdResponse>>> {
    let ad_id = parse_id(&raw_id, "ad id")?;
    let ad = state
        .ads
        .change_ad_status(ad_id, req.published, req.user_id)
        .await?;

    info!(ad_id, published = ad.published, "changed ad status");
    Ok(Json(Envelope::data(AdResponse::from(ad))))
}

#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}",
    tag = "Ads",
    params(("ad_id" = String, Path, description = "Ad identifier")),
    request_body = UpdateAdRequest,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 400, description = "Invalid fields"),
        (status = 403, description = "Requester is not the author")
    )
)]
pub async fn update_ad(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    BodyJson(req): BodyJson<UpdateAdRequest>,
) -> AppResult<Json<Envelope<AdResponse>>> {
    let ad_id = parse_id(&raw_id, "ad id")?;
    let ad = state
        .ads
        .update_ad(req.user_id, req.title, req.text, ad_id)
        .await?;

    info!(ad_id, "updated ad");
    Ok(Json(Envelope::data(AdResponse::from(ad))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/ads/delete/{ad_id}",
    tag = "Ads",
    params(("ad_id" = String, Path, description = "Ad identifier")),
    request_body = DeleteAdRequest,
    responses(
        (status = 200, description = "Removed ad", body = AdResponse),
        (status = 403, description = "Requester is not the author"),
        (status = 404, description = "No such ad")
    )
)]
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    BodyJson(req): BodyJson<DeleteAdRequest>,
) -> AppResult<Json<Envelope<AdResponse>>> {
    let ad_id = parse_id(&raw_id, "ad id")?;
    let ad = state.ads.delete_ad(req.user_id, ad_id).await?;

    info!(ad_id, author_id = ad.author_id, "deleted ad");
    Ok(Json(Envelope::data(AdResponse::from(ad))))
}
