//! Server name derivation
//!
//! The server name is the resource's primary identifier. It is derived again
//! on every invocation, so the derivation has to be deterministic.

use crate::model::ResourceModel;
use sha2::{Digest, Sha256};

/// Longest server name the service accepts
pub const MAX_SERVER_NAME_LENGTH: usize = 40;

const GUID_LENGTH: usize = 12;

/// Server names may not start with a digit
const SERVER_NAME_PREFIX: &str = "server";

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Resolve the server name for an invocation.
///
/// The previous model's name always wins, so Update and Delete never
/// rename the remote server. Without one, a missing name is synthesized
/// from the logical id and client token, and an over-long name is cut to
/// [`MAX_SERVER_NAME_LENGTH`].
pub fn derive_server_name(
    logical_resource_id: &str,
    client_request_token: &str,
    previous: Option<&ResourceModel>,
    desired: &ResourceModel,
) -> String {
    if let Some(name) = previous
        .and_then(|m| m.server_name.as_deref())
        .filter(|name| !name.is_empty())
    {
        return name.to_string();
    }

    match desired.server_name.as_deref() {
        None | Some("") => {
            tracing::info!("Request model has no server name, generating one");
            generate_server_name(logical_resource_id, client_request_token)
        }
        Some(name) if name.chars().count() > MAX_SERVER_NAME_LENGTH => {
            tracing::info!(
                max_length = MAX_SERVER_NAME_LENGTH,
                "Server name too long, truncating"
            );
            name.chars().take(MAX_SERVER_NAME_LENGTH).collect()
        }
        Some(name) => name.to_string(),
    }
}

/// `<logical id, at most 27 chars>-<12 alphanumeric chars>`
///
/// The suffix is a function of the client request token only, so retries
/// of the same request produce the same name.
pub fn generate_server_name(logical_resource_id: &str, client_request_token: &str) -> String {
    let starts_with_digit = logical_resource_id
        .chars()
        .next()
        .is_none_or(|c| c.is_ascii_digit());

    let base = if starts_with_digit {
        format!("{}{}", SERVER_NAME_PREFIX, logical_resource_id)
    } else {
        logical_resource_id.to_string()
    };

    let max_prefix_length = MAX_SERVER_NAME_LENGTH - GUID_LENGTH - 1;
    let prefix: String = base.chars().take(max_prefix_length).collect();

    format!("{}-{}", prefix, token_suffix(client_request_token))
}

fn token_suffix(client_request_token: &str) -> String {
    Sha256::digest(client_request_token.as_bytes())
        .iter()
        .take(GUID_LENGTH)
        .map(|b| ALPHANUMERIC[*b as usize % ALPHANUMERIC.len()] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "4b90a7e4-b790-456b-a937-0cfdfa211dfe";

    fn named(name: &str) -> ResourceModel {
        ResourceModel {
            server_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_generated_name_from_long_logical_id() {
        let logical_id = "OpsWorksCMServerHasAVeryLongResourceId";
        let name = derive_server_name(logical_id, TOKEN, None, &ResourceModel::default());

        assert_eq!(name.len(), MAX_SERVER_NAME_LENGTH);
        assert!(name.starts_with(&format!("{}-", &logical_id[..27])));
        assert!(name[28..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_server_name("MyServer", TOKEN);
        let b = generate_server_name("MyServer", TOKEN);
        let c = generate_server_name("MyServer", "another-token");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("MyServer-"));
        assert_eq!(a.len(), "MyServer-".len() + GUID_LENGTH);
    }

    #[test]
    fn test_digit_and_empty_logical_ids_get_prefix() {
        let name = generate_server_name("01234", TOKEN);
        assert!(name.starts_with("server01234-"), "{name}");

        let name = generate_server_name("", TOKEN);
        assert!(name.starts_with("server-"), "{name}");
        assert_eq!(name.len(), "server-".len() + GUID_LENGTH);
    }

    #[test]
    fn test_long_supplied_name_is_truncated() {
        let long = "a".repeat(39) + &"b".repeat(40);
        let name = derive_server_name("Logical", TOKEN, None, &named(&long));
        assert_eq!(name, &long[..40]);
    }

    #[test]
    fn test_supplied_name_is_kept() {
        let name = derive_server_name("Logical", TOKEN, None, &named("chef-prod"));
        assert_eq!(name, "chef-prod");
    }

    #[test]
    fn test_previous_name_wins() {
        let previous = named("original-name");
        let name = derive_server_name("Logical", TOKEN, Some(&previous), &named("renamed"));
        assert_eq!(name, "original-name");

        // empty previous name falls through to the desired model
        let name = derive_server_name("Logical", TOKEN, Some(&named("")), &named("renamed"));
        assert_eq!(name, "renamed");
    }
}
