//! The conversion page, rendered as a block of text.

use crate::components::{Input, ProgressBar, Text};
use crate::consts::MARK_UP;
use crate::conversion::format_converted;
use crate::spinner;
use crate::state::ConversionState;

pub const HEADING: &str = "Currency Conversion";

const LABEL_WIDTH: usize = 12;
const BAR_WIDTH: usize = 40;

/// Render the whole page. `frame` picks the loader glyph.
pub fn render(state: &ConversionState, frame: usize) -> String {
    let mut lines = vec![HEADING.to_string(), String::new()];

    lines.push(format!(
        "{}  ⇄ {} ⇄  {}",
        Text::labelled("From", &currency_label(state.from)).render(LABEL_WIDTH),
        state.exchange_rate,
        Text::labelled("To", &currency_label(state.to)).render(4),
    ));
    lines.push(String::new());

    lines.push(
        Input::new("Amount", state.amount.as_str())
            .rejected(state.amount.rejected())
            .render(LABEL_WIDTH),
    );
    let with_markup = format_converted(state.converted_with_markup());
    lines.push(
        Text::labelled(&format!("{} (-{MARK_UP}%)", state.to.currency), &with_markup)
            .render(LABEL_WIDTH),
    );
    let without_markup = format_converted(state.converted());
    lines.push(Text::labelled(state.to.currency, &without_markup).render(LABEL_WIDTH));
    lines.push(String::new());

    lines.push(
        ProgressBar::new(state.progress.value(), BAR_WIDTH)
            .slow(state.loading)
            .render(),
    );

    if state.loading {
        lines.push(spinner::loader_line(frame, state.pair()));
    } else if let Some(error) = &state.error {
        lines.push(format!("✗ {error}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn currency_label(country: &crate::countries::Country) -> String {
    format!("{} ({})", country.currency, country.code)
}
