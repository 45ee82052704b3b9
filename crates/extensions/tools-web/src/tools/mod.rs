//! Web tool implementations.

mod http_request;
mod open_url;
mod rss;
mod slack;
mod web_search;

pub use http_request::HttpRequestTool;
pub use open_url::OpenUrlTool;
pub use rss::{FeedItem, FeedStore, RssTool, Subscription};
pub use slack::SlackTool;
pub use web_search::WebSearchTool;
