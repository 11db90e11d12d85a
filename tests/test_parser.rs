use microhttpd::http::line::LineReader;
use microhttpd::http::request::read_request;
use microhttpd::http::response::StatusCode;

fn reader(input: &[u8], max_len: usize) -> LineReader<&[u8]> {
    LineReader::new(input, max_len)
}

#[tokio::test]
async fn test_read_line_crlf_and_lf() {
    let mut lines = reader(b"first\r\nsecond\nthird", 64);

    assert_eq!(lines.read_line().await.unwrap(), b"first".to_vec());
    assert_eq!(lines.read_line().await.unwrap(), b"second".to_vec());
    assert_eq!(lines.read_line().await.unwrap(), b"third".to_vec());
    assert_eq!(lines.read_line().await.unwrap(), Vec::<u8>::new());
}

#[tokio::test]
async fn test_read_line_empty_stream() {
    let mut lines = reader(b"", 64);
    assert!(lines.read_line().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_read_line_lone_cr_is_rejected() {
    let mut lines = reader(b"GET / HTTP/1.0\rX\n", 64);
    let failure = lines.read_line().await.unwrap_err();

    assert_eq!(failure.status, StatusCode::BadRequest);
    assert_eq!(failure.text, "Unexpected byte sequence in headers.");
}

#[tokio::test]
async fn test_read_line_cr_at_end_of_stream_is_rejected() {
    let mut lines = reader(b"abc\r", 64);
    let failure = lines.read_line().await.unwrap_err();
    assert_eq!(failure.status, StatusCode::BadRequest);
}

#[tokio::test]
async fn test_read_line_too_long() {
    let mut lines = reader(b"abcdefgh\r\n", 8);
    let failure = lines.read_line().await.unwrap_err();

    assert_eq!(failure.status, StatusCode::EntityTooLarge);
    assert_eq!(failure.title, "Entity Too Large");
}

#[tokio::test]
async fn test_read_line_just_under_limit() {
    let mut lines = reader(b"abcdefg\r\n", 8);
    assert_eq!(lines.read_line().await.unwrap(), b"abcdefg".to_vec());
}

#[tokio::test]
async fn test_read_request_drains_headers() {
    let input = b"GET /a.html HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\nleftover";
    let mut lines = reader(input, 1024);

    let request = read_request(&mut lines).await.unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, b"/a.html");
    assert_eq!(request.protocol, "HTTP/1.1");

    assert_eq!(lines.read_line().await.unwrap(), b"leftover".to_vec());
}

#[tokio::test]
async fn test_read_request_without_headers_or_blank_line() {
    let mut lines = reader(b"GET / HTTP/1.0", 1024);
    let request = read_request(&mut lines).await.unwrap();
    assert_eq!(request.path, b"/");
}

#[tokio::test]
async fn test_read_request_empty_input() {
    let mut lines = reader(b"\r\n", 1024);
    let failure = read_request(&mut lines).await.unwrap_err();

    assert_eq!(failure.status, StatusCode::BadRequest);
    assert_eq!(failure.text, "No request found.");
}

#[tokio::test]
async fn test_read_request_unparseable() {
    let mut lines = reader(b"GET /\r\n\r\n", 1024);
    let failure = read_request(&mut lines).await.unwrap_err();
    assert_eq!(failure.text, "Can't parse request.");
}

#[tokio::test]
async fn test_read_request_case_insensitive_method() {
    let mut lines = reader(b"gEt / HTTP/1.0\r\n\r\n", 1024);
    assert!(read_request(&mut lines).await.is_ok());
}

#[tokio::test]
async fn test_read_request_other_method_not_implemented() {
    let mut lines = reader(b"POST /../etc/passwd HTTP/1.0\r\n\r\n", 1024);
    let failure = read_request(&mut lines).await.unwrap_err();

    assert_eq!(failure.status, StatusCode::NotImplemented);
    assert_eq!(failure.title, "Not Implemented");
}

#[tokio::test]
async fn test_read_request_header_too_long() {
    let mut input = b"GET / HTTP/1.0\r\nX-Long: ".to_vec();
    input.extend(std::iter::repeat_n(b'a', 100));
    input.extend_from_slice(b"\r\n\r\n");

    let mut lines = reader(&input, 64);
    let failure = read_request(&mut lines).await.unwrap_err();
    assert_eq!(failure.status, StatusCode::EntityTooLarge);
}
