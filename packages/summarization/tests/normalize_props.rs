//! Property tests for normalization and post-processing invariants.

use proptest::prelude::*;
use summarization::{cap_words, finalize, normalize, ELLIPSIS};

const TAGS: &[(&str, &str)] = &[
    ("<p>", "</p>"),
    ("<div class=\"x\">", "</div>"),
    ("<b>", "</b>"),
    ("<span>", "</span>"),
    ("<li>", "</li>"),
    ("", "<br/>"),
];

fn markup() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec(
        ("[a-zA-Z0-9]{1,8}", 0..TAGS.len(), "[ \t\n]{0,3}"),
        0..30,
    )
    .prop_map(|parts| {
        let mut html = String::new();
        let mut words = Vec::new();
        for (word, tag, ws) in parts {
            let (open, close) = TAGS[tag];
            html.push_str(open);
            html.push_str(&word);
            html.push_str(close);
            html.push_str(&ws);
            words.push(word);
        }
        (html, words)
    })
}

fn words_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 0..60).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn normalized_has_no_markup_or_double_whitespace((html, words) in markup()) {
        let out = normalize(&html);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| c.is_whitespace() && c != ' '));
        prop_assert_eq!(out.trim(), out.as_str());
        for word in &words {
            prop_assert!(out.contains(word.as_str()));
        }
    }

    #[test]
    fn normalize_is_idempotent((html, _words) in markup()) {
        let once = normalize(&html);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn finalize_idempotent_under_cap(s in words_text(), title in "[a-zA-Z ]{0,8}") {
        let once = finalize(&s, &title, 120);
        prop_assert_eq!(finalize(&once, &title, 120), once);
    }

    #[test]
    fn cap_never_exceeds_limit(s in words_text(), max in 1usize..80) {
        let out = cap_words(&s, max);
        let count = out.split_whitespace().count();
        prop_assert!(count <= max);
        if s.split_whitespace().count() > max {
            prop_assert!(out.ends_with(ELLIPSIS));
            prop_assert_eq!(count, max);
        } else {
            prop_assert_eq!(out, s);
        }
    }
}
