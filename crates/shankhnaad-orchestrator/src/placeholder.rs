//! Placeholder art for failed image generation.
//!
//! Renders a small devotional SVG locally and hands it back as a data URI.
//! This path is infallible: whatever the prompt, the user always gets an
//! image when the remote endpoint declines.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

use shankhnaad_core::{ImageLocator, ImageResult, ImageSource};

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

/// Banner text is cut to this many characters so it fits the canvas.
const BANNER_LIMIT: usize = 48;

/// (background, primary motif, accent) palettes, all in devotional hues.
const PALETTES: &[(&str, &str, &str)] = &[
    ("#1a0f2e", "#ffb347", "#e8d5b7"),
    ("#0d1b2a", "#f4a261", "#e9c46a"),
    ("#2b1b3d", "#ff9e64", "#ffd9a0"),
    ("#14213d", "#fca311", "#e5e5e5"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Lotus,
    Deity,
    Symbol,
}

fn choose_layout(prompt: &str) -> Layout {
    let lowered = prompt.to_lowercase();
    if lowered.contains("lotus") || lowered.contains("flower") {
        Layout::Lotus
    } else if lowered.contains("krishna")
        || lowered.contains("radha")
        || lowered.contains("vishnu")
        || lowered.contains("deity")
    {
        Layout::Deity
    } else {
        Layout::Symbol
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn banner(prompt: &str) -> String {
    let trimmed = prompt.trim();
    let cut: String = trimmed.chars().take(BANNER_LIMIT).collect();
    escape_xml(&cut)
}

fn motif(layout: Layout, primary: &str, accent: &str) -> String {
    match layout {
        Layout::Lotus => {
            // Eight petals around a center circle.
            let mut petals = String::new();
            for i in 0..8 {
                let angle = i * 45;
                petals.push_str(&format!(
                    "<ellipse cx=\"256\" cy=\"180\" rx=\"28\" ry=\"80\" fill=\"{primary}\" \
                     opacity=\"0.85\" transform=\"rotate({angle} 256 256)\"/>"
                ));
            }
            format!("{petals}<circle cx=\"256\" cy=\"256\" r=\"44\" fill=\"{accent}\"/>")
        }
        Layout::Deity => format!(
            "<circle cx=\"256\" cy=\"200\" r=\"56\" fill=\"{accent}\"/>\
             <path d=\"M 256 144 C 236 110 276 110 256 82\" stroke=\"{primary}\" \
             stroke-width=\"10\" fill=\"none\" stroke-linecap=\"round\"/>\
             <rect x=\"196\" y=\"262\" width=\"120\" height=\"150\" rx=\"40\" fill=\"{primary}\"/>"
        ),
        Layout::Symbol => format!(
            "<text x=\"256\" y=\"300\" font-size=\"200\" text-anchor=\"middle\" \
             fill=\"{primary}\" font-family=\"serif\">\u{0950}</text>\
             <circle cx=\"256\" cy=\"256\" r=\"150\" stroke=\"{accent}\" stroke-width=\"4\" \
             fill=\"none\" opacity=\"0.6\"/>"
        ),
    }
}

/// Render placeholder art for a prompt. Never fails.
pub fn placeholder_art(prompt: &str) -> ImageResult {
    let (background, primary, accent) =
        PALETTES[rand::thread_rng().gen_range(0..PALETTES.len())];
    let layout = choose_layout(prompt);

    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">\
         <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"{background}\"/>\
         {}\
         <text x=\"256\" y=\"472\" font-size=\"20\" text-anchor=\"middle\" fill=\"{accent}\" \
         font-family=\"serif\" font-style=\"italic\">{}</text>\
         </svg>",
        motif(layout, primary, accent),
        banner(prompt),
    );

    let uri = format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg));
    ImageResult {
        source: ImageSource::Placeholder,
        locator: ImageLocator::DataUri { uri },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(result: &ImageResult) -> String {
        match &result.locator {
            ImageLocator::DataUri { uri } => {
                let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
                String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
            }
            other => panic!("expected data URI, got {other:?}"),
        }
    }

    #[test]
    fn always_produces_a_valid_data_uri() {
        for prompt in ["", "a lotus pond", "Krishna with flute", "anything else"] {
            let result = placeholder_art(prompt);
            assert_eq!(result.source, ImageSource::Placeholder);
            let svg = decode(&result);
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
        }
    }

    #[test]
    fn layout_follows_prompt_keywords() {
        assert_eq!(choose_layout("a lotus at dawn"), Layout::Lotus);
        assert_eq!(choose_layout("Radha and Krishna dancing"), Layout::Deity);
        assert_eq!(choose_layout("a mountain sunrise"), Layout::Symbol);
    }

    #[test]
    fn prompt_text_is_escaped_and_truncated() {
        let long = format!("<script>{}", "a".repeat(100));
        let svg = decode(&placeholder_art(&long));
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
        let banner = banner(&long);
        assert!(banner.chars().count() <= BANNER_LIMIT + 20); // escaping expands entities
    }
}
