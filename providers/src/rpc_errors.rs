use balsnap_core::errors::QueryError;
use solana_rpc_client_api::{
    client_error::{Error as ClientError, ErrorKind},
    request::RpcError,
};
use solana_sdk::pubkey::Pubkey;

/// Messages the RPC node answers with when the mint we ask about is missing
/// or is not a token mint at all.
const MISSING_MINT_MESSAGES: [&str; 3] = [
    "could not find mint",
    "not a Token mint",
    "could not find account",
];

/// Sorts a failed RPC call into the query error kinds.
/// - the node answered that the mint does not exist: [QueryError::TokenNotFound]
/// - the node answered with any other error: [QueryError::QueryRejected]
/// - everything else is a transport failure: [QueryError::RpcClientError]
pub fn classify_client_error(err: ClientError, token: &Pubkey) -> QueryError {
    match err.kind() {
        ErrorKind::RpcError(RpcError::RpcResponseError { message, .. }) => {
            if MISSING_MINT_MESSAGES
                .iter()
                .any(|needle| message.contains(needle))
            {
                QueryError::TokenNotFound(*token)
            } else {
                QueryError::QueryRejected(message.clone())
            }
        }
        _ => QueryError::RpcClientError(err),
    }
}

#[cfg(test)]
mod tests {
    use solana_rpc_client_api::request::RpcResponseErrorData;

    use super::*;

    fn response_error(message: &str) -> ClientError {
        ClientError::from(ErrorKind::RpcError(RpcError::RpcResponseError {
            code: -32602,
            message: message.to_string(),
            data: RpcResponseErrorData::Empty,
        }))
    }

    #[test]
    fn test_missing_mint_is_token_not_found() {
        let token = Pubkey::new_unique();
        let err = classify_client_error(
            response_error("Invalid param: could not find mint"),
            &token,
        );
        assert!(matches!(err, QueryError::TokenNotFound(pubkey) if pubkey == token));
    }

    #[test]
    fn test_other_response_error_is_rejected() {
        let err = classify_client_error(
            response_error("Invalid param: WrongSize"),
            &Pubkey::new_unique(),
        );
        assert!(matches!(err, QueryError::QueryRejected(msg) if msg.contains("WrongSize")));
    }

    #[test]
    fn test_transport_error_is_passed_through() {
        let err = classify_client_error(
            ClientError::from(ErrorKind::Custom("connection refused".into())),
            &Pubkey::new_unique(),
        );
        assert!(matches!(err, QueryError::RpcClientError(_)));
    }
}
