#![allow(missing_docs)]

/// A document exercising every value kind, mixed nesting, escapes, and
/// non-ASCII text. Kept free of duplicate keys so `serde_json` can act as a
/// second opinion on it.
pub const CORPUS: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "totals": {
        "files": 3,
        "ratio": 0.625,
        "offset": -17,
        "huge": 1.25e11,
        "tiny": 2e-3
    },
    "mixed": [
        "s",
        {
            "k": "v"
        },
        "t",
        [
            "u"
        ],
        "end",
        true,
        false,
        null
    ],
    "text": "tabs\tand\nnewlines and a slash / and a quote \" and a fire 🔥",
    "empty_array": [],
    "empty_object": {}
}
"#;
