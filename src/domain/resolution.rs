// src/domain/resolution.rs

use crate::bcpao::BcpaoError;

/// Outcome of matching a street address to an appraiser account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountMatch {
    Found(u64),
    NotFound,
    /// More than one candidate, in the order the API returned them.
    Ambiguous(Vec<u64>),
}

impl AccountMatch {
    pub fn from_candidates(accounts: Vec<u64>) -> Self {
        match accounts.as_slice() {
            [] => AccountMatch::NotFound,
            [account] => AccountMatch::Found(*account),
            _ => AccountMatch::Ambiguous(accounts),
        }
    }

    /// Converts anything other than a single match into the matching error.
    pub fn into_account(self, address: &str) -> Result<u64, BcpaoError> {
        match self {
            AccountMatch::Found(account) => Ok(account),
            AccountMatch::NotFound => Err(BcpaoError::NoResults {
                address: address.to_string(),
            }),
            AccountMatch::Ambiguous(accounts) => Err(BcpaoError::Ambiguous {
                address: address.to_string(),
                accounts,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_counts_map_to_outcomes() {
        assert_eq!(AccountMatch::from_candidates(vec![]), AccountMatch::NotFound);
        assert_eq!(
            AccountMatch::from_candidates(vec![2728703]),
            AccountMatch::Found(2728703)
        );
        assert_eq!(
            AccountMatch::from_candidates(vec![2728703, 2819382]),
            AccountMatch::Ambiguous(vec![2728703, 2819382])
        );
    }

    #[test]
    fn ambiguous_error_names_address_and_candidates() {
        let err = AccountMatch::Ambiguous(vec![1, 2])
            .into_account("100 MAIN ST")
            .unwrap_err();

        assert!(matches!(err, BcpaoError::Ambiguous { ref accounts, .. } if accounts == &vec![1, 2]));
        let msg = err.to_string();
        assert!(msg.contains("100 MAIN ST"));
        assert!(msg.contains("[1, 2]"));
    }

    #[test]
    fn not_found_error() {
        let err = AccountMatch::NotFound.into_account("nowhere").unwrap_err();
        assert!(matches!(err, BcpaoError::NoResults { .. }));
        assert!(err.is_resolution_failure());
    }
}
