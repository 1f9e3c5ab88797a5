//! Askama templates for the browser pages.
//!
//! Pages only ever receive `ThreadView`s, so secrets cannot reach the HTML.

use askama::Template;
use domains::ThreadView;

/// Percent-encodes a decoded board name so it round-trips as one path
/// segment in links, form actions and `Location` headers.
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPage<'a> {
    pub title: String,
    pub board: &'a str,
    pub segment: String,
    pub threads: &'a [ThreadView],
}

#[derive(Template)]
#[template(path = "thread.html")]
pub struct ThreadPage<'a> {
    pub title: String,
    pub board: &'a str,
    pub segment: String,
    pub thread: &'a ThreadView,
}
