//! Tests for the Ulu Trie enumerators.
//!
//! Table tests pin down the exact answers for a fixed vocabulary; property
//! tests compare both enumerators against a brute-force scan of the word
//! set.

use crate::data_structures::{LauBuffer, TerminalPolicy, UluTrie, UluTrieConfig};
use crate::tests::{raw_query_strategy, vocabulary_strategy};
use proptest::prelude::*;
use std::collections::BTreeSet;
use test_case::test_case;

const VOCABULARY: &[&str] = &[
    "teleport",
    "telephone",
    "telegram",
    "telegraph",
    "telescope",
    "television",
    "tell",
    "apple",
    "ape",
    "apostle",
];

fn trie_with<S: AsRef<str>>(words: &[S], terminal_policy: TerminalPolicy) -> UluTrie {
    let mut trie = UluTrie::with_config(UluTrieConfig {
        terminal_policy,
        ..Default::default()
    });
    for word in words {
        trie.insert(word.as_ref()).unwrap();
    }
    trie
}

fn sanitized(raw: &str) -> LauBuffer {
    let mut query = LauBuffer::from(raw);
    query.sanitize();
    query
}

#[test_case("tele", 2 => vec!["telegram", "teleport"] ; "shortest words first")]
#[test_case("tele", 3 => vec!["telegram", "teleport", "telegraph"] ; "ties broken alphabetically")]
#[test_case("tel", 3 => vec!["tell", "telegram", "teleport"] ; "shorter branch wins")]
#[test_case("telex", 2 => vec!["telegram", "teleport"] ; "completes from longest matched prefix")]
#[test_case("ap", 10 => vec!["ape", "apple", "apostle"] ; "fewer words than limit")]
#[test_case("apple", 5 => vec!["apple"] ; "exact word")]
#[test_case("xyz", 5 => Vec::<&str>::new() ; "no match")]
#[test_case("", 5 => Vec::<&str>::new() ; "empty query")]
#[test_case("tele", 0 => Vec::<&str>::new() ; "zero limit")]
fn test_bounded_completions(query: &str, limit: usize) -> Vec<String> {
    let trie = trie_with(VOCABULARY, TerminalPolicy::Stop);
    trie.enumerate_bounded(&sanitized(query), limit).unwrap()
}

#[test_case("ap" => vec!["ape", "apostle", "apple"] ; "lexicographic order")]
#[test_case("tel" => vec!["telegram", "telegraph", "telephone", "teleport", "telescope", "television", "tell"] ; "whole subtree")]
#[test_case("telex" => vec!["telegram", "telegraph", "telephone", "teleport", "telescope", "television"] ; "partial match")]
#[test_case("tell" => vec!["tell"] ; "exact word")]
#[test_case("q" => Vec::<&str>::new() ; "no match")]
fn test_all_completions(query: &str) -> Vec<String> {
    let trie = trie_with(VOCABULARY, TerminalPolicy::Stop);
    trie.enumerate_all(&sanitized(query)).unwrap()
}

#[test]
fn test_sanitized_query_matches_clean_query() {
    let trie = trie_with(VOCABULARY, TerminalPolicy::Stop);

    assert_eq!(
        trie.enumerate_bounded(&sanitized("  TeLe-2!"), 2).unwrap(),
        trie.enumerate_bounded(&sanitized("tele"), 2).unwrap()
    );
}

#[test]
fn test_deep_words_do_not_overflow() {
    let word = "z".repeat(1024);
    let mut trie = UluTrie::with_config(UluTrieConfig {
        max_depth: 1024,
        ..Default::default()
    });
    trie.insert(&word).unwrap();

    assert_eq!(trie.enumerate_all(&sanitized("zz")).unwrap(), vec![word.clone()]);
    assert_eq!(trie.enumerate_bounded(&sanitized("z"), 1).unwrap(), vec![word]);
    trie.clear();
    assert_eq!(trie.node_count(), 0);
}

/// Brute-force answer: every stored word with `prefix` that is not hidden
/// by a shorter stored word when the policy stops at terminals.
fn expected_completions(
    words: &BTreeSet<String>,
    prefix: &str,
    terminal_policy: TerminalPolicy,
) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.starts_with(prefix))
        .filter(|word| {
            terminal_policy == TerminalPolicy::Descend
                || !words.iter().any(|other| {
                    other.len() >= prefix.len()
                        && other.len() < word.len()
                        && word.starts_with(other.as_str())
                })
        })
        .cloned()
        .collect()
}

fn policy_strategy() -> impl Strategy<Value = TerminalPolicy> {
    prop_oneof![Just(TerminalPolicy::Stop), Just(TerminalPolicy::Descend)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_enumerate_all_matches_brute_force(
        words in vocabulary_strategy(),
        pick in any::<prop::sample::Index>(),
        cut in 1usize..=8,
        policy in policy_strategy(),
    ) {
        let trie = trie_with(&words, policy);
        let set: BTreeSet<String> = words.iter().cloned().collect();

        // A prefix of a stored word is always fully matched
        let source = pick.get(&words);
        let prefix = &source[..cut.min(source.len())];

        let expected = expected_completions(&set, prefix, policy);
        prop_assert_eq!(trie.enumerate_all(&sanitized(prefix)).unwrap(), expected);
    }

    #[test]
    fn prop_bounded_is_level_order_prefix_of_all(
        words in vocabulary_strategy(),
        pick in any::<prop::sample::Index>(),
        cut in 1usize..=8,
        limit in 0usize..50,
        policy in policy_strategy(),
    ) {
        let trie = trie_with(&words, policy);
        let source = pick.get(&words);
        let query = sanitized(&source[..cut.min(source.len())]);

        let mut all = trie.enumerate_all(&query).unwrap();
        all.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        let bounded = trie.enumerate_bounded(&query, limit).unwrap();

        prop_assert!(bounded.len() <= limit);
        prop_assert_eq!(bounded.len(), limit.min(all.len()));
        prop_assert_eq!(&bounded[..], &all[..bounded.len()]);
    }

    #[test]
    fn prop_completions_extend_matched_prefix(
        words in vocabulary_strategy(),
        raw in raw_query_strategy(),
    ) {
        let trie = trie_with(&words, TerminalPolicy::Stop);
        let query = sanitized(&raw);
        let located = trie.locate(query.as_bytes());
        let matched = &query.as_str().unwrap()[..located.matched];

        for completion in trie.enumerate_bounded(&query, 10).unwrap() {
            prop_assert!(completion.starts_with(matched));
            prop_assert!(trie.contains(&completion));
        }
        if located.matched == 0 {
            prop_assert!(trie.enumerate_all(&query).unwrap().is_empty());
        }
    }

    #[test]
    fn prop_insertion_is_idempotent(words in vocabulary_strategy()) {
        let mut trie = trie_with(&words, TerminalPolicy::Descend);
        let distinct: BTreeSet<&String> = words.iter().collect();
        let nodes = trie.node_count();
        prop_assert_eq!(trie.len(), distinct.len());

        for word in &words {
            prop_assert!(!trie.insert(word).unwrap());
        }
        prop_assert_eq!(trie.len(), distinct.len());
        prop_assert_eq!(trie.node_count(), nodes);
    }
}
