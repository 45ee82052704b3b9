//! Web tools for F.R.A.N.K.I.E.
//!
//! `http_request`, `web_search`, `open_url`, `rss` and `slack`.

mod html;
mod tools;

pub use tools::{
    FeedItem, FeedStore, HttpRequestTool, OpenUrlTool, RssTool, SlackTool, Subscription,
    WebSearchTool,
};
