use actix_conneg::{parse_request, HttpMessageExt as _, MediaTypeList, NegotiationError};
use http::{header, Request, StatusCode};

#[test]
fn accept_without_content_type() {
    let req = Request::get("/")
        .header(header::ACCEPT, "text/plain")
        .body(())
        .unwrap();

    let (ct, accept) = parse_request(&req).unwrap();

    assert!(ct.is_none());
    assert_eq!(accept.len(), 1);
    assert_eq!(accept[0].essence(), "text/plain");
}

#[test]
fn accept_with_content_type() {
    let req = Request::post("/")
        .header(header::ACCEPT, "text/plain")
        .header(header::CONTENT_TYPE, "application/json")
        .body(())
        .unwrap();

    let (ct, accept) = parse_request(&req).unwrap();

    assert_eq!(ct.unwrap().essence(), "application/json");
    assert_eq!(accept.len(), 1);
    assert_eq!(accept[0].essence(), "text/plain");
}

#[test]
fn folded_accept_headers() {
    let req = Request::get("/")
        .header(header::ACCEPT, "text/html")
        .header(header::ACCEPT, "application/xhtml+xml")
        .header(header::ACCEPT, "application/xml;q=0.9, */*;q=0.8")
        .body(())
        .unwrap();

    let accept = req.accepted_media_types().unwrap();
    assert_eq!(
        accept.iter().map(|mt| mt.essence()).collect::<Vec<_>>(),
        vec![
            "text/html",
            "application/xhtml+xml",
            "application/xml",
            "*/*"
        ]
    );
}

#[test]
fn malformed_content_type_is_bad_request() {
    let req = Request::post("/")
        .header(header::CONTENT_TYPE, "application")
        .body(())
        .unwrap();

    let err = parse_request(&req).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn negotiation_outcomes() {
    let offered: MediaTypeList = "application/json, text/html".parse().unwrap();

    let req = Request::get("/")
        .header(header::ACCEPT, "text/*")
        .body(())
        .unwrap();
    assert_eq!(req.negotiate(&offered).unwrap().essence(), "text/html");

    let req = Request::get("/")
        .header(header::ACCEPT, "image/*, */*; q=0")
        .body(())
        .unwrap();
    let err = req.negotiate(&offered).unwrap_err();
    assert_eq!(err, NegotiationError::NotAcceptable);
    assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);

    let req = Request::get("/")
        .header(header::ACCEPT, "text/html; q=high")
        .body(())
        .unwrap();
    let err = req.negotiate(&offered).unwrap_err();
    assert!(matches!(err, NegotiationError::Parse(_)));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}
