use itertools::Itertools;
use serde::Serialize;

use crate::codewarsclient::CodewarsUser;

/// Reserved category backed by the overall score rather than a language
/// entry.
pub const OVERALL_CATEGORY: &str = "overall";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub username: String,
    pub clan: String,
    pub score: i64,
}

/// Union of ranking categories across the given records: "overall" first,
/// then every language that appears in any record's language ranks.
pub fn ranking_categories(users: &[CodewarsUser]) -> Vec<String> {
    let mut categories = vec![OVERALL_CATEGORY.to_string()];
    categories.extend(
        users
            .iter()
            .flat_map(|user| {
                user.ranks
                    .as_ref()
                    .map(|ranks| ranks.languages.keys().cloned().collect::<Vec<_>>())
                    .unwrap_or_default()
            })
            .unique()
            .sorted(),
    );
    categories
}

/// Score of a user under a category. The overall score defaults to zero
/// when absent; a missing language entry yields None, which excludes the
/// user from that ranking.
pub fn score_for(user: &CodewarsUser, category: &str) -> Option<i64> {
    let ranks = user.ranks.as_ref();

    if category == OVERALL_CATEGORY {
        return Some(
            ranks
                .and_then(|ranks| ranks.overall.as_ref())
                .map(|overall| overall.score)
                .unwrap_or(0),
        );
    }

    ranks
        .and_then(|ranks| ranks.languages.get(category))
        .map(|entry| entry.score)
}

/// Rows for the chosen category, sorted descending by score. Tie order is
/// not guaranteed.
pub fn rank_users(users: &[CodewarsUser], category: &str) -> Vec<LeaderboardRow> {
    users
        .iter()
        .filter_map(|user| {
            score_for(user, category).map(|score| LeaderboardRow {
                username: user.username.clone(),
                clan: user.clan.clone().unwrap_or_default(),
                score,
            })
        })
        .sorted_by(|a, b| b.score.cmp(&a.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codewarsclient::{RankScore, UserRanks};

    fn user(username: &str, overall: Option<i64>, languages: &[(&str, i64)]) -> CodewarsUser {
        CodewarsUser {
            username: username.to_string(),
            clan: None,
            ranks: Some(UserRanks {
                overall: overall.map(|score| RankScore { score }),
                languages: languages
                    .iter()
                    .map(|(name, score)| (name.to_string(), RankScore { score: *score }))
                    .collect(),
            }),
        }
    }

    fn bare_user(username: &str) -> CodewarsUser {
        CodewarsUser {
            username: username.to_string(),
            clan: None,
            ranks: None,
        }
    }

    #[test]
    fn test_categories_always_contain_overall() {
        assert_eq!(ranking_categories(&[]), vec!["overall".to_string()]);
    }

    #[test]
    fn test_categories_union_language_keys() {
        let users = vec![
            user("alice", Some(1), &[("rust", 10), ("python", 5)]),
            user("bob", Some(2), &[("rust", 3), ("haskell", 7)]),
            bare_user("carol"),
        ];

        let categories = ranking_categories(&users);

        assert_eq!(categories[0], "overall");
        assert_eq!(categories[1..], ["haskell", "python", "rust"]);
    }

    #[test]
    fn test_overall_score_defaults_to_zero() {
        assert_eq!(score_for(&user("alice", None, &[]), "overall"), Some(0));
        assert_eq!(score_for(&bare_user("bob"), "overall"), Some(0));
    }

    #[test]
    fn test_language_score_absence_excludes_user() {
        let alice = user("alice", Some(1), &[("rust", 10)]);

        assert_eq!(score_for(&alice, "rust"), Some(10));
        assert_eq!(score_for(&alice, "haskell"), None);
        assert_eq!(score_for(&bare_user("bob"), "rust"), None);
    }

    #[test]
    fn test_rank_users_sorts_descending() {
        let users = vec![
            user("low", Some(10), &[]),
            user("high", Some(300), &[]),
            user("mid", Some(42), &[]),
        ];

        let rows = rank_users(&users, "overall");

        let usernames: Vec<&str> = rows.iter().map(|row| row.username.as_str()).collect();
        assert_eq!(usernames, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_users_excludes_unranked_for_language() {
        let users = vec![
            user("alice", Some(1), &[("rust", 10)]),
            user("bob", Some(2), &[]),
        ];

        let rows = rank_users(&users, "rust");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "alice");
        assert_eq!(rows[0].score, 10);
    }

    #[test]
    fn test_rank_users_renders_missing_clan_as_empty() {
        let rows = rank_users(&[bare_user("alice")], "overall");

        assert_eq!(
            rows,
            vec![LeaderboardRow {
                username: "alice".to_string(),
                clan: String::new(),
                score: 0,
            }]
        );
    }
}
