use oauth2::url::Url;
use serde::{Deserialize, Serialize};

/// The comment request body, accepted as JSON or an urlencoded form.
/// Consumed once per request; never stored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CommentForm {
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub comment: String,
}

impl CommentForm {
    /// The YouTube video id, taken from the `v` query parameter of the
    /// submitted URL. A malformed URL or missing parameter yields `None`;
    /// the caller passes the id onward unvalidated and lets the external
    /// API reject it.
    pub fn video_id(&self) -> Option<String> {
        let url = Url::parse(&self.video_url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    }
}
