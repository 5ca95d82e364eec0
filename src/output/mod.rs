//! Output generation for the sentence CLI application

use sentence::sentence::Sentence;
use tinytemplate::{format_unescaped, TinyTemplate};
use tracing::{debug, info};

use crate::problem::Failure;

pub static DEFAULT_TEMPLATE: &str = "[{position}] {text}";

/// Print every position of the sentence to standard output, one line each,
/// formatted through the given template. Lines are written as they are
/// rendered, so on failure those before the offending position have already
/// been printed.
pub fn via_template(sentence: &Sentence, template: &str) -> Result<(), Failure> {
    info!("Rendering {} positions", sentence.len());

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("line", template)
        .map_err(Failure::Template)?;

    for line in sentence.lines() {
        let line = line.map_err(Failure::Render)?;
        let rendered = tt
            .render("line", &line)
            .map_err(Failure::Template)?;
        println!("{}", rendered);
    }

    debug!("Rendering complete");
    Ok(())
}
