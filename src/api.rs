use log::debug;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::schema::{PageIndex, UserLogin};

pub const DEFAULT_BASE_URL: &str = "https://letterboxd.com/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot build the URL of page {page} for user {user:?} under {base_url}")]
    Url {
        page: PageIndex,
        user: UserLogin,
        base_url: Url,
    },
    #[error("Unexpected status code for {url}: server returned {status}")]
    Status { url: Url, status: StatusCode },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Anything that can hand out the markup of a diary page.
#[allow(async_fn_in_trait)]
pub trait DiaryPageSource {
    async fn fetch_page(&self, page: PageIndex) -> Result<String, FetchError>;
}

pub struct DiaryClient {
    client: reqwest::Client,
    base_url: Url,
    user: UserLogin,
}

impl DiaryClient {
    pub fn new(base_url: Url, user: UserLogin) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().connection_verbose(true).build()?;
        Ok(Self {
            client,
            base_url,
            user,
        })
    }

    pub fn user(&self) -> &UserLogin {
        &self.user
    }

    pub fn page_url(&self, page: PageIndex) -> Result<Url, FetchError> {
        diary_page_url(&self.base_url, &self.user, page)
    }
}

impl DiaryPageSource for DiaryClient {
    async fn fetch_page(&self, page: PageIndex) -> Result<String, FetchError> {
        let url = self.page_url(page)?;
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }
        Ok(response.text().await?)
    }
}

/// `{base}/{user}/films/diary/` for the first page,
/// `{base}/{user}/films/diary/page/{i}/` for the rest.
pub fn diary_page_url(base_url: &Url, user: &UserLogin, page: PageIndex) -> Result<Url, FetchError> {
    let invalid = || FetchError::Url {
        page,
        user: user.clone(),
        base_url: base_url.clone(),
    };
    // Dot segments would climb out of the user's directory.
    if matches!(user.as_str(), "" | "." | "..") {
        return Err(invalid());
    }
    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| invalid())?;
        segments
            .pop_if_empty()
            .extend([user.as_str(), "films", "diary"]);
        if page.get() > 1 {
            segments.extend(["page", page.get().to_string().as_str()]);
        }
        // Trailing slash
        segments.push("");
    }
    Ok(url)
}
