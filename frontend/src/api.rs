#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use inkwave_shared::{
    error::FetchError,
    newsletter::{SubscribeRequest, SubscribeResponse},
    search::SuggestionResult,
};
#[cfg(not(feature = "mock"))]
use inkwave_shared::{
    newsletter::{CSRF_HEADER, SUBSCRIBE_PATH},
    search::suggestions_url,
};

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::mock;

/// 获取搜索建议，`query` 须已 trim 且非空
pub async fn fetch_suggestions(query: &str) -> Result<SuggestionResult, FetchError> {
    #[cfg(feature = "mock")]
    {
        return Ok(mock::suggestions(query));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = suggestions_url(API_BASE, query);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }

        response
            .json::<SuggestionResult>()
            .await
            .map_err(|e| FetchError::Parse(format!("{:?}", e)))
    }
}

/// Subscribe `email` to the newsletter.
///
/// The endpoint reports rejections (duplicate address, blank email) as a
/// normal JSON body with `success: false`, so the body is parsed regardless of
/// the status code. Only an unparseable body on a failed status becomes
/// [`FetchError::Http`].
pub async fn subscribe(email: &str, csrf_token: &str) -> Result<SubscribeResponse, FetchError> {
    let body = SubscribeRequest {
        email: email.to_string(),
    };

    #[cfg(feature = "mock")]
    {
        let _ = csrf_token;
        return Ok(mock::subscribe(&body));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}{}", API_BASE.trim_end_matches('/'), SUBSCRIBE_PATH);

        let response = Request::post(&url)
            .header(CSRF_HEADER, csrf_token)
            .json(&body)
            .map_err(|e| FetchError::Parse(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        let status = response.status();
        let ok = response.ok();
        match response.json::<SubscribeResponse>().await {
            Ok(data) => Ok(data),
            Err(_) if !ok => Err(FetchError::Http(status)),
            Err(e) => Err(FetchError::Parse(format!("{:?}", e))),
        }
    }
}
