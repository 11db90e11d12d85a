use std::fs;
use std::path::Path;

use microhttpd::http::path::{decode_request_path, is_traversal, resolve, Target};
use microhttpd::http::response::StatusCode;
use tempfile::tempdir;

#[test]
fn test_traversal_patterns() {
    assert!(is_traversal(b".."));
    assert!(is_traversal(b"../secret"));
    assert!(is_traversal(b"a/../../b"));
    assert!(is_traversal(b"a/.."));
    assert!(is_traversal(b"/etc/passwd"));

    assert!(!is_traversal(b"..."));
    assert!(!is_traversal(b"..foo"));
    assert!(!is_traversal(b"a/..b/c"));
    assert!(!is_traversal(b"a/b.."));
}

#[test]
fn test_decode_requires_leading_slash() {
    let failure = decode_request_path(b"index.html").unwrap_err();

    assert_eq!(failure.status, StatusCode::BadRequest);
    assert_eq!(failure.text, "Bad filename.");
}

#[test]
fn test_decode_empty_path_is_root() {
    assert_eq!(decode_request_path(b"/").unwrap(), b"./".to_vec());
}

#[test]
fn test_decode_escapes() {
    assert_eq!(decode_request_path(b"/a%20b.txt").unwrap(), b"a b.txt".to_vec());
}

#[test]
fn test_decode_rejects_encoded_traversal() {
    for raw in ["/..", "/../x", "/a/../b", "/a/..", "//etc", "/%2e%2e/x", "/a%2f..%2fb", "/%2fetc"] {
        let failure = decode_request_path(raw.as_bytes()).unwrap_err();
        assert_eq!(failure.status, StatusCode::BadRequest, "{raw}");
        assert_eq!(failure.text, "Illegal filename.", "{raw}");
    }
}

#[tokio::test]
async fn test_traversal_rejected_before_stat() {
    // a root that does not exist would turn any stat into a 404
    let root = Path::new("/nonexistent/document/root");
    let failure = resolve(root, b"/../etc/passwd").await.unwrap_err();
    assert_eq!(failure.status, StatusCode::BadRequest);
}

#[tokio::test]
async fn test_resolve_regular_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();

    match resolve(dir.path(), b"/a.txt").await.unwrap() {
        Target::File(entry) => {
            assert_eq!(entry.name, b"a.txt".to_vec());
            assert_eq!(entry.metadata.len(), 5);
        }
        other => panic!("expected file, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_missing_is_not_found() {
    let dir = tempdir().unwrap();
    let failure = resolve(dir.path(), b"/missing.txt").await.unwrap_err();

    assert_eq!(failure.status, StatusCode::NotFound);
    assert_eq!(failure.text, "File not found.");
}

#[tokio::test]
async fn test_resolve_directory_without_slash_redirects() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub dir")).unwrap();

    let failure = resolve(dir.path(), b"/sub%20dir").await.unwrap_err();

    assert_eq!(failure.status, StatusCode::MovedPermanently);
    assert_eq!(failure.extra_header.as_deref(), Some("Location: /sub%20dir/"));
}

#[tokio::test]
async fn test_resolve_directory_prefers_index() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/index.html"), b"<p>hi</p>").unwrap();

    match resolve(dir.path(), b"/sub/").await.unwrap() {
        Target::File(entry) => {
            assert_eq!(entry.name, b"sub/index.html".to_vec());
            assert_eq!(entry.path, dir.path().join("sub/").join("index.html"));
        }
        other => panic!("expected index file, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_root_is_directory() {
    let dir = tempdir().unwrap();

    match resolve(dir.path(), b"/").await.unwrap() {
        Target::Directory(entry) => assert_eq!(entry.name, b"./".to_vec()),
        other => panic!("expected directory, got {other:?}"),
    }
}
