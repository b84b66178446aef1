//! Server-rendered HTML for the location form.

use std::fmt::Write;

/// Page title and heading
pub const TITLE: &str = "Weather Information App";

/// Message shown when the form is submitted without a location
pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a location";

/// What the page shows under the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet
    Empty,
    /// The composed weather report
    Report(String),
    /// A failed submission
    Error(String),
}

/// Render the full page, echoing `location` back into the input.
///
/// Every caller-supplied string is HTML-escaped.
#[must_use]
pub fn render(location: &str, outcome: &Outcome) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{TITLE}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
.big-font {{ font-size: 2.5rem; font-weight: bold; margin: 0; }}
.medium-font {{ font-size: 1.25rem; color: #555; }}
.layout {{ display: flex; gap: 2rem; }}
.main {{ flex: 2; }}
.side {{ flex: 1; }}
.success {{ background: #e6f4ea; padding: 0.75rem; }}
.error {{ background: #fdecea; padding: 0.75rem; }}
.report {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<p class="big-font">&#x1F326;&#xFE0F; {TITLE}</p>
<p class="medium-font">Get real-time weather information for any location!</p>
<div class="layout">
<div class="main">
<form method="post" action="/weather">
<label for="location">Enter your location</label><br>
<input id="location" name="location" type="text" placeholder="e.g., New York, London, Tokyo" value="{location}">
<button type="submit">Get Weather</button>
</form>
"#,
        location = escape(location),
    );

    match outcome {
        Outcome::Empty => {}
        Outcome::Report(report) => {
            let _ = write!(
                html,
                r#"<p class="success">Weather information retrieved!</p>
<h3>Weather Report</h3>
<div class="report">{}</div>
"#,
                escape(report)
            );
        }
        Outcome::Error(message) => {
            let _ = writeln!(html, r#"<p class="error">{}</p>"#, escape(message));
        }
    }

    html.push_str(
        r#"</div>
<div class="side">
<h3>How to use</h3>
<p>1. Enter a location in the text box</p>
<p>2. Click 'Get Weather' button</p>
<p>3. Wait for the results to appear</p>
<h3>About</h3>
<p>This app uses OpenAI's GPT model and OpenWeatherMap API to provide accurate and up-to-date weather information.</p>
</div>
</div>
</body>
</html>
"#,
    );

    html
}

/// Escape text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
