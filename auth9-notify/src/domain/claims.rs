//! User claim types

use std::collections::HashMap;

/// Claim URI -> claim value
pub type ClaimMap = HashMap<String, String>;

/// Claim holding the user's email address, relative to the claim URI root
pub const EMAIL_CLAIM: &str = "emailaddress";

/// Claim holding the user's locale, relative to the claim URI root
pub const LOCALE_CLAIM: &str = "locality";

/// Merge identity claims staged for the current operation into the persisted
/// claims. Persisted values win; staged values only fill missing keys.
pub fn merge_staged_claims(mut persisted: ClaimMap, staged: &ClaimMap) -> ClaimMap {
    for (uri, value) in staged {
        if !persisted.contains_key(uri) {
            persisted.insert(uri.clone(), value.clone());
        }
    }
    persisted
}

/// Look up a claim by its name relative to `root`, ignoring empty values
pub fn claim_value<'a>(claims: &'a ClaimMap, root: &str, name: &str) -> Option<&'a str> {
    claims
        .get(&format!("{}{}", root, name))
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}
