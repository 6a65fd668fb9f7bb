use uipro_mobile::versions::{render_text, VERSIONS};

use super::Format;

pub(crate) fn run(format: Format) {
    match format {
        Format::Text => print!("{}", render_text(VERSIONS)),
        Format::Json => println!("{}", serde_json::to_string_pretty(VERSIONS).unwrap()),
    }
}
