//! Call-level log fields: transport metadata merged with message tags.
//!
//! RPC interceptors log one flat field set per call. [`CallFields`] builds it
//! from the call target, method, elapsed time, request metadata and the tags
//! of the request and response messages.

use std::{fmt, time::Duration};

use crate::{Tags, TagExtractor, reflect::Message};

/// Metadata key renamed to [`REQUEST_UID`] when copied into the fields.
pub const REQUEST_ID_METADATA: &str = "request-id";
/// Field holding the request identifier.
pub const REQUEST_UID: &str = "request.uid";
/// Prefix of every response tag.
pub const RESPONSE_PREFIX: &str = "grpc.response.";

/// Flat fields describing one RPC call.
///
/// On key collision `server`, `method` and `duration` always win. Response
/// tags (under [`RESPONSE_PREFIX`]) come next, then request tags, and the
/// metadata entries lose to all of them.
///
/// ```
/// use std::time::Duration;
/// use logtags::{CallFields, Tags};
///
/// let request: Tags = [("user.id", "42")].into_iter().collect();
/// let fields = CallFields::new()
///     .server("billing:443")
///     .method("/billing.v1.Billing/Charge")
///     .metadata("request-id", ["r-1"])
///     .request(Some(request))
///     .duration(Duration::from_millis(12))
///     .into_tags();
///
/// assert_eq!(fields.get("request.uid"), Some("r-1"));
/// assert_eq!(fields.get("user.id"), Some("42"));
/// assert_eq!(fields.get("duration"), Some("12ms"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallFields {
    server: Option<String>,
    method: Option<String>,
    duration: Option<Duration>,
    metadata: Tags,
    request: Option<Tags>,
    response: Option<Tags>,
}

impl CallFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target the client is connected to.
    #[must_use]
    pub fn server(mut self, target: impl Into<String>) -> Self {
        self.server = Some(target.into());
        self
    }

    /// Full method name of the call.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Time elapsed since the call started.
    #[must_use]
    pub fn duration(mut self, elapsed: Duration) -> Self {
        self.duration = Some(elapsed);
        self
    }

    /// Adds one metadata entry; multiple values are joined with `:`.
    ///
    /// The `request-id` key is stored as `request.uid`.
    #[must_use]
    pub fn metadata<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let key = if key == REQUEST_ID_METADATA {
            REQUEST_UID
        } else {
            key
        };
        let joined = values
            .into_iter()
            .map(|value| value.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(":");
        self.metadata.insert(key, joined);
        self
    }

    /// Sets the request identifier directly.
    #[must_use]
    pub fn request_uid(self, uid: impl AsRef<str>) -> Self {
        self.metadata(REQUEST_ID_METADATA, [uid])
    }

    /// Tags of the request message.
    #[must_use]
    pub fn request(mut self, tags: Option<Tags>) -> Self {
        self.request = tags;
        self
    }

    /// Tags of the response message, stored under [`RESPONSE_PREFIX`].
    #[must_use]
    pub fn response(mut self, tags: Option<Tags>) -> Self {
        self.response = tags;
        self
    }

    /// Extracts and stores the tags of the request message.
    #[must_use]
    pub fn request_message(self, extractor: &TagExtractor, message: &dyn Message) -> Self {
        let tags = extractor.extract(message);
        self.request(tags)
    }

    /// Extracts and stores the tags of the response message.
    #[must_use]
    pub fn response_message(self, extractor: &TagExtractor, message: &dyn Message) -> Self {
        let tags = extractor.extract(message);
        self.response(tags)
    }

    /// Flattens the fields into tags.
    #[must_use]
    pub fn into_tags(self) -> Tags {
        let mut tags = Tags::new();
        if let Some(server) = self.server {
            tags.insert("server", server);
        }
        if let Some(method) = self.method {
            tags.insert("method", method);
        }
        if let Some(duration) = self.duration {
            tags.insert("duration", format!("{duration:?}"));
        }
        // First write wins, so merge from the highest priority down.
        if let Some(response) = self.response {
            tags.merge(response.prefixed(RESPONSE_PREFIX));
        }
        if let Some(request) = self.request {
            tags.merge(request);
        }
        tags.merge(self.metadata);
        tags
    }
}

impl From<CallFields> for Tags {
    fn from(fields: CallFields) -> Self {
        fields.into_tags()
    }
}

impl fmt::Display for CallFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.clone().into_tags(), f)
    }
}
