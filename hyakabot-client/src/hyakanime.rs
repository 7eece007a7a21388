use eyre::{Report, Result, WrapErr};
use hyakabot_model::{AnimeEntry, HyakanimeUser, StatusCounts, UserLookup};

use crate::{Client, ClientError};

impl Client {
    /// Resolve a pseudo to a user, falling back to the search
    /// endpoint when the direct lookup knows no such name.
    ///
    /// `None` means there is no such user, which is not an error.
    pub async fn resolve_user(&self, pseudo: &str) -> Result<Option<HyakanimeUser>> {
        if let Some(user) = self.hyakanime_user(pseudo).await? {
            return Ok(Some(user));
        }

        let mut users = self.hyakanime_user_search(pseudo).await?;

        if users.is_empty() {
            Ok(None)
        } else {
            Ok(Some(users.swap_remove(0)))
        }
    }

    /// Direct lookup by pseudo.
    pub async fn hyakanime_user(
        &self,
        pseudo: &str,
    ) -> Result<Option<HyakanimeUser>, ClientError> {
        let url = format!("{base}/user/{pseudo}", base = self.api_base);

        let bytes = match self.make_get_request(url).await {
            Ok(bytes) => bytes,
            Err(ClientError::NotFound) => return Ok(None),
            Err(err) => return Err(err),
        };

        let lookup: UserLookup = serde_json::from_slice(&bytes).map_err(|err| {
            let body = String::from_utf8_lossy(&bytes);
            let wrap = format!("Failed to deserialize user lookup: {body}");

            ClientError::Report(Report::new(err).wrap_err(wrap))
        })?;

        match lookup {
            UserLookup::Found(user) => Ok(Some(user)),
            UserLookup::NotFound { message } => {
                debug!("User lookup for `{pseudo}` failed: {message}");

                Ok(None)
            }
        }
    }

    pub async fn hyakanime_user_search(&self, pseudo: &str) -> Result<Vec<HyakanimeUser>> {
        let url = format!("{base}/search/user/{pseudo}", base = self.api_base);
        let bytes = self.make_get_request(url).await?;

        serde_json::from_slice(&bytes).wrap_err_with(|| {
            let body = String::from_utf8_lossy(&bytes);

            format!("Failed to deserialize user search: {body}")
        })
    }

    pub async fn anime_progressions(&self, uid: &str) -> Result<Vec<AnimeEntry>> {
        let url = format!("{base}/progression/anime/{uid}", base = self.api_base);
        let bytes = self.make_get_request(url).await?;

        serde_json::from_slice(&bytes).wrap_err_with(|| {
            let body = String::from_utf8_lossy(&bytes);

            format!("Failed to deserialize anime progressions: {body}")
        })
    }

    pub async fn anime_status_counts(&self, uid: &str) -> Result<StatusCounts> {
        let url = format!(
            "{base}/progression/anime/stats/status/{uid}",
            base = self.api_base
        );

        let bytes = self.make_get_request(url).await?;

        serde_json::from_slice(&bytes).wrap_err_with(|| {
            let body = String::from_utf8_lossy(&bytes);

            format!("Failed to deserialize status counts: {body}")
        })
    }
}
