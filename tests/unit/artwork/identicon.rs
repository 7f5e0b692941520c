use super::*;

fn base() -> Url {
    Url::parse(DEFAULT_IDENTICON_URL).unwrap()
}

#[test]
fn url_carries_seed_and_size() {
    let url = identicon_url(&base(), "Hello", 1200);
    assert_eq!(
        url.as_str(),
        "https://api.dicebear.com/6.x/identicon/png?seed=Hello&size=1200"
    );
}

#[test]
fn spaces_and_reserved_characters_are_encoded() {
    let url = identicon_url(&base(), "A B", 1200);
    assert!(url.as_str().contains("seed=A%20B&"));

    let url = identicon_url(&base(), "Q&A / 100%?", 64);
    assert_eq!(url.query(), Some("seed=Q%26A%20/%20100%25%3F&size=64"));

    let url = identicon_url(&base(), "a+b*c~d", 8);
    assert_eq!(url.query(), Some("seed=a%2Bb%2Ac~d&size=8"));
}

#[test]
fn non_ascii_is_percent_encoded_and_stable() {
    let a = identicon_url(&base(), "Cien años", 10);
    let b = identicon_url(&base(), "Cien años", 10);
    assert_eq!(a, b);
    assert!(a.as_str().contains("seed=Cien%20a%C3%B1os"));
}

#[test]
fn existing_query_parameters_survive() {
    let base = Url::parse("http://localhost:9/png?backgroundColor=ffffff").unwrap();
    let url = identicon_url(&base, "x", 4);
    assert_eq!(url.query(), Some("backgroundColor=ffffff&seed=x&size=4"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = IdenticonClient::new(IdenticonOpts {
        base_url: "not a url".to_string(),
        timeout: None,
    })
    .unwrap_err();
    assert!(matches!(err, TapitaError::Validation(_)));
}
