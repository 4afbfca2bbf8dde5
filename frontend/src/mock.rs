//! Canned endpoint data for `--features mock` builds, shaped like the real
//! server's answers.
//!
//! Articles match on title, category, writer or tag, like the server does.
//! Subscribing differs on one point: the server only rejects an empty email,
//! while the mock also rejects whitespace-only input.

use inkwave_shared::{
    newsletter::{SubscribeRequest, SubscribeResponse},
    search::{ArticleSuggestion, CategorySuggestion, SuggestionResult, WriterSuggestion},
};

const MAX_PER_GROUP: usize = 5;

struct MockArticle {
    title: &'static str,
    slug: &'static str,
    category: &'static str,
    writer: &'static str,
    tags: &'static [&'static str],
}

const ARTICLES: &[MockArticle] = &[
    MockArticle {
        title: "Getting Started",
        slug: "getting-started",
        category: "Rust",
        writer: "ada",
        tags: &["beginner"],
    },
    MockArticle {
        title: "Ownership Explained",
        slug: "ownership-explained",
        category: "Rust",
        writer: "grace",
        tags: &["memory"],
    },
    MockArticle {
        title: "Async in Practice",
        slug: "async-in-practice",
        category: "Rust",
        writer: "linus",
        tags: &["tokio"],
    },
    MockArticle {
        title: "Error Handling Patterns",
        slug: "error-handling-patterns",
        category: "Rust",
        writer: "ada",
        tags: &["errors"],
    },
    MockArticle {
        title: "Traits and Generics",
        slug: "traits-and-generics",
        category: "Rust",
        writer: "grace",
        tags: &["types"],
    },
    MockArticle {
        title: "Shipping a CLI",
        slug: "shipping-a-cli",
        category: "Rust",
        writer: "linus",
        tags: &["tooling"],
    },
    MockArticle {
        title: "Dark Mode Done Right",
        slug: "dark-mode-done-right",
        category: "Design",
        writer: "grace",
        tags: &["css"],
    },
    MockArticle {
        title: "WebAssembly for Web Developers",
        slug: "webassembly-for-web-developers",
        category: "Web",
        writer: "rustacean",
        tags: &["wasm"],
    },
];

const WRITERS: &[&str] = &["ada", "grace", "linus", "rustacean"];

const CATEGORIES: &[(&str, &str)] = &[
    ("Rust", "rust"),
    ("Web", "web"),
    ("Design", "design"),
    ("Tutorials", "tutorials"),
];

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl MockArticle {
    fn matches(&self, query: &str) -> bool {
        matches(self.title, query)
            || matches(self.category, query)
            || matches(self.writer, query)
            || self.tags.iter().any(|tag| matches(tag, query))
    }
}

pub fn suggestions(query: &str) -> SuggestionResult {
    let query = query.trim();
    if query.is_empty() {
        return SuggestionResult::default();
    }

    SuggestionResult {
        articles: ARTICLES
            .iter()
            .filter(|article| article.matches(query))
            .take(MAX_PER_GROUP)
            .map(|article| ArticleSuggestion {
                title: article.title.to_string(),
                url: format!("/article/{}/", article.slug),
            })
            .collect(),
        writers: WRITERS
            .iter()
            .filter(|name| matches(name, query))
            .take(MAX_PER_GROUP)
            .map(|name| WriterSuggestion {
                username: (*name).to_string(),
                url: format!("/account/profile/{}/", name),
            })
            .collect(),
        categories: CATEGORIES
            .iter()
            .filter(|(name, _)| matches(name, query))
            .take(MAX_PER_GROUP)
            .map(|(name, slug)| CategorySuggestion {
                name: (*name).to_string(),
                url: format!("/category/{}/", slug),
            })
            .collect(),
    }
}

pub fn subscribe(request: &SubscribeRequest) -> SubscribeResponse {
    if request.email.trim().is_empty() {
        return SubscribeResponse {
            success: false,
            message: "Email is required.".to_string(),
        };
    }

    SubscribeResponse {
        success: true,
        message: "Subscription successful! Check your email.".to_string(),
    }
}
