use std::cell::RefCell;

use super::*;

thread_local! {
    static RELEASED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record_release(url: &str) {
    RELEASED.with(|r| r.borrow_mut().push(url.to_owned()));
}

fn released() -> Vec<String> {
    RELEASED.with(|r| r.borrow().clone())
}

#[test]
fn drop_runs_release_once() {
    let preview = PreviewUrl::new("blob:one", record_release);
    assert_eq!(preview.as_str(), "blob:one");
    assert!(released().is_empty());
    drop(preview);
    assert_eq!(released(), vec!["blob:one".to_owned()]);
}

#[test]
fn clone_of_url_text_outlives_release() {
    let preview = PreviewUrl::new("blob:kept", record_release);
    let text = preview.as_str().to_owned();
    drop(preview);
    assert_eq!(text, "blob:kept");
    assert_eq!(released(), vec!["blob:kept".to_owned()]);
}

#[test]
fn replacing_an_option_releases_previous() {
    let mut slot = Some(PreviewUrl::new("blob:a", record_release));
    drop(slot.replace(PreviewUrl::new("blob:b", record_release)));
    assert_eq!(released(), vec!["blob:a".to_owned()]);
    drop(slot.take());
    assert_eq!(released(), vec!["blob:a".to_owned(), "blob:b".to_owned()]);
}

#[test]
fn debug_shows_url() {
    let preview = PreviewUrl::new("blob:shown", record_release);
    let text = format!("{preview:?}");
    assert!(text.contains("blob:shown"));
}
