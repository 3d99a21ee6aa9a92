// SPDX-License-Identifier: MPL-2.0
//! Gallery item download driven end to end into a temporary downloads
//! directory.

mod common;

use common::{record, CallLog, FakeFetcher, FakeImages};
use pictury::application::download::{download_image, DownloadPorts};
use pictury::application::port::ImagePathResolver;
use pictury::domain::auth::User;
use pictury::domain::gallery::LikedSet;
use pictury::error::ActionError;
use pictury::infrastructure::{DownloadsDirSaver, PublicStorageResolver};
use pictury::ui::gallery::item::{self, Effect, ItemContext, Message};
use pictury::ui::notifications::Severity;
use std::sync::Arc;
use tempfile::tempdir;

fn user() -> User {
    User {
        id: "u-1".to_string(),
        email: Some("ada@example.com".to_string()),
    }
}

fn resolver() -> PublicStorageResolver {
    PublicStorageResolver::new(Some("https://storage.test".to_string()), "images")
}

#[test]
fn resolved_and_placeholder_display_locations() {
    let resolver = resolver();
    let with_path = item::State::new(record("1", "Fox"), &resolver);
    assert_eq!(with_path.display().as_str(), "https://storage.test/images/u1/1.jpg");

    let mut bare = record("2", "Empty");
    bare.storage_path.clear();
    let without_path = item::State::new(bare, &resolver);
    assert!(without_path.display().is_placeholder());
    assert_eq!(resolver.resolve(without_path.record()), None);
}

#[tokio::test]
async fn item_download_lands_in_the_downloads_directory() {
    let dir = tempdir().expect("temp dir");
    let log = Arc::new(CallLog::default());
    let ports = DownloadPorts {
        images: Arc::new(FakeImages {
            reference: Ok("https://signed.test/u1/1.jpg?token=t".to_string()),
            log: log.clone(),
        }),
        fetcher: Arc::new(FakeFetcher {
            bytes: Ok(b"jpeg".to_vec()),
            log: log.clone(),
        }),
        saver: Arc::new(DownloadsDirSaver::new(dir.path())),
    };

    let liked = LikedSet::new();
    let user = user();
    let ctx = ItemContext {
        liked: &liked,
        disabled: false,
        user: Some(&user),
    };
    let mut state = item::State::new(record("1", "Fox"), &resolver());
    assert!(!state.is_download_pending());

    let Effect::Download { ticket, record } = state.handle(Message::Download, &ctx) else {
        panic!("download should start for a signed-in user");
    };
    assert!(state.is_download_pending());

    let result = download_image(ports.clone(), record.clone()).await;
    let effect = state.handle(Message::DownloadSettled { ticket, result }, &ctx);

    assert!(!state.is_download_pending());
    match effect {
        Effect::Notify(n) => assert_eq!(n.severity(), Severity::Success),
        other => panic!("expected a success notification, got {other:?}"),
    }
    let saved = dir.path().join("Fox.jpg");
    assert_eq!(std::fs::read(&saved).expect("saved file"), b"jpeg");

    // A second download of the same image never overwrites the first.
    let second = download_image(ports, record).await.expect("second download");
    assert_eq!(second, dir.path().join("Fox (1).jpg"));
}

#[tokio::test]
async fn failed_download_clears_pending_and_reports_the_message() {
    let dir = tempdir().expect("temp dir");
    let log = Arc::new(CallLog::default());
    let ports = DownloadPorts {
        images: Arc::new(FakeImages {
            reference: Err(ActionError::new("Not allowed")),
            log: log.clone(),
        }),
        fetcher: Arc::new(FakeFetcher {
            bytes: Ok(Vec::new()),
            log: log.clone(),
        }),
        saver: Arc::new(DownloadsDirSaver::new(dir.path())),
    };

    let liked = LikedSet::new();
    let user = user();
    let ctx = ItemContext {
        liked: &liked,
        disabled: false,
        user: Some(&user),
    };
    let mut state = item::State::new(record("1", "Fox"), &resolver());
    let Effect::Download { ticket, record } = state.handle(Message::Download, &ctx) else {
        panic!("download should start");
    };

    let result = download_image(ports, record).await;
    let effect = state.handle(Message::DownloadSettled { ticket, result }, &ctx);

    assert!(!state.is_download_pending());
    match effect {
        Effect::Notify(n) => {
            assert_eq!(n.severity(), Severity::Error);
            assert_eq!(n.message_text(), Some("Not allowed"));
        }
        other => panic!("expected an error notification, got {other:?}"),
    }
    assert_eq!(log.count("fetch"), 0);
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}
