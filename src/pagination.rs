use crate::client::CanvasClient;
use crate::error::CanvasResult;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::warn;
use url::Url;

/// Lazy iterator over the pages of a Canvas collection endpoint.
///
/// Follows the response `Link` header (`rel="next"`) until the server
/// stops advertising a next page. Each item is one page of records;
/// constructing a fresh iterator restarts the walk from the first page.
pub struct Pages<'a, T> {
    client: &'a CanvasClient,
    next: Option<Url>,
    _records: PhantomData<fn() -> T>,
}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(client: &'a CanvasClient, first: Url) -> Self {
        Self {
            client,
            next: Some(first),
            _records: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Pages<'_, T> {
    /// Drain every remaining page into one vector
    pub fn collect_all(self) -> CanvasResult<Vec<T>> {
        let mut records = Vec::new();
        for page in self {
            records.extend(page?);
        }
        Ok(records)
    }
}

impl<T: DeserializeOwned> Iterator for Pages<'_, T> {
    type Item = CanvasResult<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next.take()?;

        let response = match self.client.get(url) {
            Ok(response) => response,
            Err(e) => return Some(Err(e)),
        };

        // The next link must be read before the body consumes the response
        self.next = next_page_url(response.headers());

        match response.json::<Vec<T>>() {
            Ok(records) => Some(Ok(records)),
            Err(e) => {
                self.next = None;
                Some(Err(e.into()))
            }
        }
    }
}

/// Extract the `rel="next"` target from a `Link` header, if any
fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get("Link")?.to_str().ok()?;

    for part in link.split(',') {
        if !part.contains("rel=\"next\"") {
            continue;
        }
        let start = part.find('<')? + 1;
        let end = part.find('>')?;
        match Url::parse(&part[start..end]) {
            Ok(url) => return Some(url),
            Err(e) => {
                warn!("Ignoring malformed next page link: {}", e);
                return None;
            }
        }
    }

    None
}
