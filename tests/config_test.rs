use std::collections::HashMap;

use songderby::Error;
use songderby::config::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const CREDENTIALS: [(&str, &str); 3] = [
    ("SPOTIFY_CLIENT_ID", "client-id"),
    ("SPOTIFY_CLIENT_SECRET", "client-secret"),
    ("SPOTIFY_CURRENT_USER", "someone"),
];

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&CREDENTIALS)).unwrap();

    assert_eq!(config.client_id, "client-id");
    assert_eq!(config.client_secret, "client-secret");
    assert_eq!(config.current_user, "someone");
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.fuzzy_ratio_threshold, 75.0);
}

#[test]
fn test_config_overrides() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("SPOTIFY_API_URL", "http://localhost:9000/v1/"));
    pairs.push(("SPOTIFY_API_TOKEN_URL", "http://localhost:9000/token"));
    pairs.push(("FUZZY_RATIO_THRESHOLD", " 60.5 "));

    let config = Config::from_lookup(lookup_from(&pairs)).unwrap();

    // Trailing slash is dropped so endpoint paths can be appended
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.token_url, "http://localhost:9000/token");
    assert_eq!(config.fuzzy_ratio_threshold, 60.5);
}

#[test]
fn test_config_missing_credentials() {
    let result = Config::from_lookup(lookup_from(&CREDENTIALS[..2]));
    assert!(matches!(
        result,
        Err(Error::MissingConfig("SPOTIFY_CURRENT_USER"))
    ));
}

#[test]
fn test_config_blank_value_counts_as_missing() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs[0] = ("SPOTIFY_CLIENT_ID", "   ");

    let result = Config::from_lookup(lookup_from(&pairs));
    assert!(matches!(result, Err(Error::MissingConfig("SPOTIFY_CLIENT_ID"))));
}

#[test]
fn test_config_invalid_threshold() {
    for value in ["abc", "100.5", "-1", "NaN"] {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("FUZZY_RATIO_THRESHOLD", value));

        match Config::from_lookup(lookup_from(&pairs)) {
            Err(Error::InvalidConfig { key, value: v }) => {
                assert_eq!(key, "FUZZY_RATIO_THRESHOLD");
                assert_eq!(v, value);
            }
            other => panic!("{} accepted: {:?}", value, other),
        }
    }
}

#[test]
fn test_config_dir() {
    assert!(config_dir().ends_with("songderby"));
}
