//! `RosterApi` over the browser `fetch` API, via `gloo-net`.
//!
//! Building a request and interpreting a response are plain functions over
//! strings; only `send` touches the browser.

use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;

use common::model::envelope::{ApiResponse, NewPlayerData, PlayerData, PlayersData};
use common::model::player::{Player, PlayerId};
use common::requests::NewPlayerRequest;

use super::{ApiError, Endpoints, RosterApi};
use crate::config::ApiConfig;

pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// A request before it is handed to `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Status line and raw body of an answered request.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub ok: bool,
    pub status: u16,
    pub url: String,
    pub body: String,
}

pub struct HttpRosterApi {
    endpoints: Endpoints,
}

impl HttpRosterApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config.base_url.clone()),
        }
    }
}

impl RosterApi for HttpRosterApi {
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ApiError> {
        let request = PreparedRequest::new(Method::GET, self.endpoints.players());
        parse_players(&send(request).await?)
    }

    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ApiError> {
        let request = PreparedRequest::new(Method::GET, self.endpoints.player(player_id));
        parse_player(&send(request).await?)
    }

    async fn add_new_player(
        &self,
        player: &NewPlayerRequest,
    ) -> Result<ApiResponse<NewPlayerData>, ApiError> {
        let request = create_player_request(&self.endpoints, player)?;
        parse_created(&send(request).await?)
    }

    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ApiError> {
        let request =
            PreparedRequest::new(Method::DELETE, self.endpoints.remove_player(player_id));
        parse_removed(&send(request).await?)
    }
}

async fn send(prepared: PreparedRequest) -> Result<RawResponse, ApiError> {
    let mut builder = RequestBuilder::new(&prepared.url).method(prepared.method);
    for (name, value) in &prepared.headers {
        builder = builder.header(name, value);
    }
    let request: Request = match prepared.body {
        Some(body) => builder.body(body)?,
        None => builder.build()?,
    };

    let response = request.send().await?;
    Ok(RawResponse {
        ok: response.ok(),
        status: response.status(),
        url: response.url(),
        body: response.text().await?,
    })
}

/// `POST /players` with the JSON-encoded form values.
pub fn create_player_request(
    endpoints: &Endpoints,
    player: &NewPlayerRequest,
) -> Result<PreparedRequest, ApiError> {
    let body = serde_json::to_string(player).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut request = PreparedRequest::new(Method::POST, endpoints.players());
    request.headers.push(CONTENT_TYPE_JSON);
    request.body = Some(body);
    Ok(request)
}

fn ensure_success(response: &RawResponse) -> Result<(), ApiError> {
    if response.ok {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status,
            url: response.url.clone(),
        })
    }
}

fn parse_envelope<T: DeserializeOwned>(response: &RawResponse) -> Result<ApiResponse<T>, ApiError> {
    ensure_success(response)?;
    let envelope: ApiResponse<T> =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.is_rejected() {
        return Err(ApiError::Rejected(envelope.rejection_message()));
    }
    Ok(envelope)
}

fn unwrap_data<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    parse_envelope::<T>(response)?
        .into_data()
        .map_err(ApiError::Decode)
}

pub fn parse_players(response: &RawResponse) -> Result<Vec<Player>, ApiError> {
    Ok(unwrap_data::<PlayersData>(response)?.players)
}

pub fn parse_player(response: &RawResponse) -> Result<Player, ApiError> {
    Ok(unwrap_data::<PlayerData>(response)?.player)
}

pub fn parse_created(response: &RawResponse) -> Result<ApiResponse<NewPlayerData>, ApiError> {
    parse_envelope(response)
}

/// DELETE bodies are optional; only a non-2xx status or an explicit
/// rejection counts as failure.
pub fn parse_removed(response: &RawResponse) -> Result<(), ApiError> {
    ensure_success(response)?;
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&response.body) {
        if envelope.is_rejected() {
            return Err(ApiError::Rejected(envelope.rejection_message()));
        }
    }
    Ok(())
}
